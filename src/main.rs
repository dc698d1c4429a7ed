fn main() {
    company_finder::run();
}
