pub mod store_page;


pub use store_page::StorePageParser;

use scraper::ElementRef;

/// Collects an element's descendant text and trims surrounding whitespace
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
