fn main() {
    if let Err(err) = bankist_core::app::run(std::env::args()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
