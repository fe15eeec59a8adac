fn main() {
    if let Err(e) = microperf::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
