fn main() {
    landing_widgets::run();
}
