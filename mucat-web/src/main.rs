fn main() {
    dioxus::launch(mucat_web::App);
}
