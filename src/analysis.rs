use tracing::info;

use crate::normalize;
use crate::ollama::OllamaClient;
use crate::scraper::Property;

/// Formatting choices for the analysis prompt.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Multiplier applied to extracted UF values before rendering. Stays at
    /// 1.0 unless a consumer expects UF amounts in thousands.
    pub uf_scale: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self { uf_scale: 1.0 }
    }
}

/// Render the instruction prompt: an opportunity-detection brief followed by
/// one table row per record with normalized UF, m² and the derived ratio.
pub fn build_prompt(properties: &[Property], opts: &AnalysisOptions) -> String {
    let mut prompt = String::from(
        "Analyze the listed properties by UF/m² and flag opportunities:\n\
         Instructions:\n\
         1. Compute UF/m² for each property (price in UF / area in m²)\n\
         2. Sort ascending by UF/m²\n\
         3. Flag the three lowest ratios as opportunities\n\n\
         Data table:\n\
         | # | Property | UF | m² | UF/m² |\n\
         |---|---|---|---|---|\n",
    );

    for (i, prop) in properties.iter().enumerate() {
        let uf = normalize::uf_value(&prop.price) * opts.uf_scale;
        let m2 = normalize::area_value(&prop.area);
        let ratio = normalize::price_per_area(&prop.price, &prop.area) * opts.uf_scale;

        prompt.push_str(&format!(
            "| {} | {} | {:.2} UF | {:.2} m² | {:.2} |\n",
            i + 1,
            prop.title,
            uf,
            m2,
            ratio,
        ));
    }

    prompt.push_str(
        "\nRequired response format:\n\
         Opportunities detected:\n\
         1. [Property name] - UF/m²: [value] (reason)\n\
         2. [Property name] - UF/m²: [value] (reason)\n\
         3. [Property name] - UF/m²: [value] (reason)\n\
         Comparative analysis: [short explanation]",
    );

    prompt
}

/// Build the prompt for the collected records and run it through Ollama.
pub async fn analyze(
    client: &OllamaClient,
    properties: &[Property],
    opts: &AnalysisOptions,
) -> anyhow::Result<String> {
    let prompt = build_prompt(properties, opts);
    info!(properties = properties.len(), chars = prompt.chars().count(), "Requesting analysis");

    let answer = client.generate(&prompt).await?;
    Ok(answer.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(title: &str, price: &str, area: &str) -> Property {
        Property {
            title: title.to_string(),
            price: price.to_string(),
            location: "Las Condes".to_string(),
            area: area.to_string(),
            bedrooms: "3 dormitorios".to_string(),
            bathrooms: "2 baños".to_string(),
            link: String::new(),
        }
    }

    #[test]
    fn prompt_contains_one_row_per_record() {
        let props = vec![
            property("Casa A", "UF16.400", "120 m² útiles"),
            property("Casa B", "UF9.800", "95 m² útiles"),
        ];

        let prompt = build_prompt(&props, &AnalysisOptions::default());

        assert!(prompt.contains("| # | Property | UF | m² | UF/m² |"));
        assert!(prompt.contains("| 1 | Casa A | 16400.00 UF | 120.00 m² | 136.67 |"));
        assert!(prompt.contains("| 2 | Casa B | 9800.00 UF | 95.00 m² | 103.16 |"));
    }

    #[test]
    fn unparseable_fields_render_as_zero() {
        let props = vec![property("Casa C", "consultar", "sin datos")];

        let prompt = build_prompt(&props, &AnalysisOptions::default());

        assert!(prompt.contains("| 1 | Casa C | 0.00 UF | 0.00 m² | 0.00 |"));
    }

    #[test]
    fn uf_scale_multiplies_rendered_values() {
        let props = vec![property("Casa D", "UF16,4", "120 m²")];

        let prompt = build_prompt(&props, &AnalysisOptions { uf_scale: 1000.0 });

        assert!(prompt.contains("| 1 | Casa D | 16400.00 UF | 120.00 m² | 136.67 |"));
    }
}
