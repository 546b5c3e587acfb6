//! wheelfit web - virtual wheel fitment in the browser

fn main() {
    dioxus::launch(wheelfit_web::App);
}
