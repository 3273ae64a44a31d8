use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;

use crate::scraper::Property;

const HEADERS: [&str; 7] = [
    "Title",
    "Price",
    "Location",
    "Area",
    "Bedrooms",
    "Bathrooms",
    "Link",
];

/// Write one CSV row per record in fixed column order. Returns the path
/// written; without an explicit path the filename carries a timestamp.
pub fn write_csv(properties: &[Property], path: Option<&Path>) -> anyhow::Result<PathBuf> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(format!(
            "properties_{}.csv",
            Local::now().format("%Y%m%d_%H%M%S")
        )),
    };

    let mut writer =
        csv::Writer::from_path(&path).with_context(|| format!("creating {}", path.display()))?;

    writer.write_record(HEADERS)?;
    for prop in properties {
        writer.write_record([
            &prop.title,
            &prop.price,
            &prop.location,
            &prop.area,
            &prop.bedrooms,
            &prop.bathrooms,
            &prop.link,
        ])?;
    }
    writer.flush()?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_one_row_per_record() {
        let props = vec![
            Property {
                title: "Casa A".to_string(),
                price: "UF16.400".to_string(),
                location: "Las Condes".to_string(),
                area: "120 m² útiles".to_string(),
                bedrooms: "4 dormitorios".to_string(),
                bathrooms: "3 baños".to_string(),
                link: "https://portal.test/casa-a".to_string(),
            },
            Property {
                title: "Casa B".to_string(),
                price: "UF9.800".to_string(),
                location: "Vitacura".to_string(),
                area: String::new(),
                bedrooms: String::new(),
                bathrooms: String::new(),
                link: String::new(),
            },
        ];

        let path = std::env::temp_dir().join(format!("portal_export_{}.csv", std::process::id()));
        let written = write_csv(&props, Some(&path)).unwrap();

        let content = std::fs::read_to_string(&written).unwrap();
        std::fs::remove_file(&written).ok();

        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Title,Price,Location,Area,Bedrooms,Bathrooms,Link");
        assert!(lines[1].starts_with("Casa A,UF16.400,Las Condes"));
        assert_eq!(lines[2], "Casa B,UF9.800,Vitacura,,,,");
    }
}
