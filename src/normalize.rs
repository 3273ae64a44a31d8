use regex::Regex;

// Numbers on the portal use Chilean formatting: "." groups thousands and
// "," marks decimals, so "UF16.400" is sixteen thousand four hundred.
// Price and area share the same grammar, keeping UF/m² ratios consistent.

/// Extract the UF amount from a stored price string, e.g. "UF16.400" -> 16400.0.
/// Strings without the UF marker yield 0.0.
pub fn uf_value(price: &str) -> f64 {
    let re = Regex::new(r"UF\s*(\d+(?:\.\d{3})*(?:,\d+)?)").unwrap();
    re.captures(price)
        .and_then(|caps| caps.get(1))
        .map(|m| parse_number(m.as_str()))
        .unwrap_or(0.0)
}

/// Extract the square-meter amount from a stored area string, e.g.
/// "120 m² útiles" -> 120.0. Strings without the m² marker yield 0.0.
pub fn area_value(area: &str) -> f64 {
    let re = Regex::new(r"(\d+(?:\.\d{3})*(?:,\d+)?)\s*m²").unwrap();
    re.captures(area)
        .and_then(|caps| caps.get(1))
        .map(|m| parse_number(m.as_str()))
        .unwrap_or(0.0)
}

/// UF per square meter for a record's stored strings. Zero when the area
/// cannot be resolved.
pub fn price_per_area(price: &str, area: &str) -> f64 {
    let m2 = area_value(area);
    if m2 == 0.0 {
        return 0.0;
    }
    uf_value(price) / m2
}

fn parse_number(token: &str) -> f64 {
    token
        .replace('.', "")
        .replace(',', ".")
        .parse()
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uf_value_reads_plain_digits() {
        assert_eq!(uf_value("UF16400"), 16400.0);
        assert_eq!(uf_value("UF75"), 75.0);
    }

    #[test]
    fn uf_value_reads_grouped_thousands() {
        assert_eq!(uf_value("UF16.400"), 16400.0);
        assert_eq!(uf_value("UF4.300"), 4300.0);
        assert_eq!(uf_value("UF 9.500"), 9500.0);
    }

    #[test]
    fn uf_value_reads_comma_decimals() {
        assert_eq!(uf_value("UF3.200,5"), 3200.5);
        assert_eq!(uf_value("UF120,75"), 120.75);
    }

    #[test]
    fn uf_value_without_marker_is_zero() {
        assert_eq!(uf_value("$185.000.000"), 0.0);
        assert_eq!(uf_value(""), 0.0);
        assert_eq!(uf_value("consultar precio"), 0.0);
    }

    #[test]
    fn area_value_reads_square_meters() {
        assert_eq!(area_value("120 m² útiles"), 120.0);
        assert_eq!(area_value("1.250 m²"), 1250.0);
        assert_eq!(area_value("98,5 m²"), 98.5);
    }

    #[test]
    fn area_value_without_marker_is_zero() {
        assert_eq!(area_value("3 dormitorios"), 0.0);
        assert_eq!(area_value(""), 0.0);
    }

    #[test]
    fn ratio_divides_price_by_area() {
        let ratio = price_per_area("UF16.400", "120 m² útiles");
        assert!((ratio - 16400.0 / 120.0).abs() < 1e-9);
    }

    #[test]
    fn ratio_is_zero_when_area_missing() {
        assert_eq!(price_per_area("UF16.400", "sin datos"), 0.0);
    }

    #[test]
    fn extraction_is_idempotent_and_order_independent() {
        let price = "UF16.400";
        let area = "120 m²";
        let first = (uf_value(price), area_value(area));
        let second = (uf_value(price), area_value(area));
        assert_eq!(first, second);
    }
}
