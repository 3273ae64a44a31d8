use scraper::{ElementRef, Html, Selector};

use crate::scraper::error::ScrapeError;
use crate::scraper::models::Property;

/// Extract every listing block on a search-results page, in document order.
///
/// A page with no listing blocks is a valid empty result, not an error.
/// Missing sub-regions degrade to empty strings; the attribute slots
/// (bedrooms, bathrooms, area) are committed only when at least three exist.
pub fn extract_properties(html: &str) -> Result<Vec<Property>, ScrapeError> {
    let document = Html::parse_document(html);

    let item_sel = selector("li.ui-search-layout__item")?;
    let title_sel = selector(".poly-component__title-wrapper")?;
    let symbol_sel = selector(".andes-money-amount__currency-symbol")?;
    let amount_sel = selector(".andes-money-amount__fraction")?;
    let location_sel = selector(".poly-component__location")?;
    let link_sel = selector("a.poly-component__title")?;
    let attr_sel = selector(".poly-attributes-list__item.poly-attributes-list__separator")?;

    let mut properties = Vec::new();

    for item in document.select(&item_sel) {
        let symbol = first_text(item, &symbol_sel);
        let amount = first_text(item, &amount_sel);

        let mut prop = Property {
            title: first_text(item, &title_sel),
            price: format!("{}{}", symbol, amount),
            location: first_text(item, &location_sel),
            area: String::new(),
            bedrooms: String::new(),
            bathrooms: String::new(),
            link: first_attr(item, &link_sel, "href"),
        };

        let attributes: Vec<ElementRef> = item.select(&attr_sel).collect();
        if attributes.len() >= 3 {
            prop.bedrooms = clean_text(&text_of(attributes[0]));
            prop.bathrooms = clean_text(&text_of(attributes[1]));
            prop.area = clean_text(&text_of(attributes[2]));
        }

        properties.push(prop);
    }

    Ok(properties)
}

fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Parse(format!("selector `{css}`: {e}")))
}

fn text_of(el: ElementRef) -> String {
    el.text().collect()
}

fn first_text(scope: ElementRef, sel: &Selector) -> String {
    scope
        .select(sel)
        .next()
        .map(|el| clean_text(&text_of(el)))
        .unwrap_or_default()
}

fn first_attr(scope: ElementRef, sel: &Selector, name: &str) -> String {
    scope
        .select(sel)
        .next()
        .and_then(|el| el.value().attr(name))
        .unwrap_or_default()
        .to_string()
}

/// Trim the ends and strip embedded newlines. Idempotent.
fn clean_text(text: &str) -> String {
    text.replace('\n', "").trim().to_string()
}
