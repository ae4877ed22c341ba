//! Terminal rendering of dispatch results

use colored::{Color, Colorize};
use domain_products::{ProductDto, ProductError, ProductResponse, ProductResult};
use serde_json::json;
use std::io::{self, Write};

pub const TOTAL_WIDTH: usize = 64;

pub const WEIGHT_APPROVED: &str = "Product weight approved";
pub const WEIGHT_REJECTED: &str = "Product weight rejected";
pub const PRODUCT_NOT_FOUND: &str = "Product not found!";
pub const NO_PRODUCTS: &str = "There are no products available!";

fn centered(msg: &str) -> String {
    let width = console::measure_text_width(msg);
    " ".repeat(TOTAL_WIDTH.saturating_sub(width) / 2)
}

pub fn header(out: &mut impl Write, msg: &str) -> io::Result<()> {
    let formatted = format!("⟦ {} ⟧", msg.to_uppercase());
    let dash_count = TOTAL_WIDTH.saturating_sub(console::measure_text_width(&formatted));
    let left = dash_count / 2;
    let right = dash_count - left;

    writeln!(
        out,
        "{}{}{}",
        "─".repeat(left).bright_black(),
        formatted.bright_green(),
        "─".repeat(right).bright_black()
    )
}

/// Centered, bold, coloured one-line message
pub fn banner(out: &mut impl Write, msg: &str, color: Color) -> io::Result<()> {
    let rule = "═".repeat(TOTAL_WIDTH).bright_black();
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}{}", centered(msg), msg.color(color).bold())?;
    writeln!(out, "{}", rule)
}

pub fn products_table(out: &mut impl Write, products: &[ProductDto]) -> io::Result<()> {
    if products.is_empty() {
        return banner(out, NO_PRODUCTS, Color::Red);
    }

    let rows: Vec<[String; 3]> = products
        .iter()
        .map(|p| [p.id.to_string(), p.name.clone(), p.weight.to_string()])
        .collect();
    let titles = ["ID", "Name", "Weight(KG)"];

    let mut widths = titles.map(console::measure_text_width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(console::measure_text_width(cell));
        }
    }

    let border = format!(
        "+{}+",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );
    let line = |cells: [&str; 3]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| {
                let pad = w.saturating_sub(console::measure_text_width(cell));
                format!(" {}{} ", cell, " ".repeat(pad))
            })
            .collect();
        format!("|{}|", padded.join("|"))
    };

    writeln!(out, "{}", border.bright_black())?;
    writeln!(out, "{}", line(titles).bold())?;
    writeln!(out, "{}", border.bright_black())?;
    for row in &rows {
        writeln!(out, "{}", line([row[0].as_str(), row[1].as_str(), row[2].as_str()]))?;
    }
    writeln!(out, "{}", border.bright_black())
}

/// Human-readable rendering of a dispatch outcome
pub fn result(out: &mut impl Write, result: &ProductResult<ProductResponse>) -> io::Result<()> {
    match result {
        Ok(ProductResponse::Created(id)) => banner(
            out,
            &format!("Product inserted successfully (id {})", id),
            Color::Green,
        ),
        Ok(ProductResponse::Products(products)) => products_table(out, products),
        Ok(ProductResponse::Tolerance(true)) => banner(out, WEIGHT_APPROVED, Color::Green),
        Ok(ProductResponse::Tolerance(false)) => banner(out, WEIGHT_REJECTED, Color::Red),
        Err(ProductError::NotFound(_)) => banner(out, PRODUCT_NOT_FOUND, Color::Yellow),
        Err(ProductError::Validation(msg)) => banner(out, msg, Color::Red),
        Err(e) => banner(out, &format!("There is an error, please try again! {}", e), Color::Red),
    }
}

fn error_kind(err: &ProductError) -> &'static str {
    match err {
        ProductError::NotFound(_) => "not_found",
        ProductError::Validation(_) => "validation",
        ProductError::Database(_) => "database",
        ProductError::Internal(_) => "internal",
    }
}

/// JSON rendering of a dispatch outcome, one document per call
pub fn json(out: &mut impl Write, result: &ProductResult<ProductResponse>) -> io::Result<()> {
    let value = match result {
        Ok(response) => serde_json::to_value(response)?,
        Err(e) => json!({ "error": error_kind(e), "message": e.to_string() }),
    };
    serde_json::to_writer_pretty(&mut *out, &value)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(res: ProductResult<ProductResponse>) -> String {
        let mut out = Vec::new();
        result(&mut out, &res).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_tolerance_banners() {
        assert!(rendered(Ok(ProductResponse::Tolerance(true))).contains(WEIGHT_APPROVED));
        assert!(rendered(Ok(ProductResponse::Tolerance(false))).contains(WEIGHT_REJECTED));
        assert!(rendered(Err(ProductError::NotFound(9))).contains(PRODUCT_NOT_FOUND));
    }

    #[test]
    fn test_empty_listing_banner() {
        assert!(rendered(Ok(ProductResponse::Products(vec![]))).contains(NO_PRODUCTS));
    }

    #[test]
    fn test_table_lists_every_product() {
        let output = rendered(Ok(ProductResponse::Products(vec![
            ProductDto::new(1, "Box", 10.0),
            ProductDto::new(2, "Long named pallet", 300.5),
        ])));

        assert!(output.contains("Weight(KG)"));
        assert!(output.contains("Box"));
        assert!(output.contains("Long named pallet"));
        assert!(output.contains("300.5"));
        assert!(!output.contains(NO_PRODUCTS));
    }

    #[test]
    fn test_validation_message_is_shown() {
        let output = rendered(Err(ProductError::Validation("min cannot exceed max".into())));
        assert!(output.contains("min cannot exceed max"));
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        json(&mut out, &Ok(ProductResponse::Created(4))).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value, json!({ "created": 4 }));

        let mut out = Vec::new();
        json(&mut out, &Err(ProductError::NotFound(4))).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["error"], "not_found");
    }
}
