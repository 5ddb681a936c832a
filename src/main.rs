fn main() {
    if let Err(err) = mandelbrot::run_cli(std::env::args().skip(1)) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
