/// One extracted listing. Every field keeps the display formatting of the
/// source page; numeric views are derived on demand by `normalize`.
///
/// `bedrooms`, `bathrooms` and `area` are filled together or not at all:
/// a block exposing fewer than three attribute slots leaves all three empty.
#[derive(Debug, Clone)]
pub struct Property {
    pub title: String,
    pub price: String,
    pub location: String,
    pub area: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub link: String,
}
