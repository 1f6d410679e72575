//! Write the page to disk.
//!
//! Run with: `cargo run -p mindread-page --example write_page`

use mindread_page::{render_page, validate::validate_repository};

fn main() {
    validate_repository().expect("content tables should be valid");

    let html = render_page();

    let output_path = "read_your_mind.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
