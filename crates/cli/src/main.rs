fn main() {
    if let Err(e) = modfind_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
