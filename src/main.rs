fn main() {
    shacnify::run_cli();
}
