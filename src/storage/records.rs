//! Record formats of the text files
//!
//! `menu.txt` holds one `id,name,description,price` line per item.
//! `completed_orders.txt` starts with a `Total Revenue = <decimal>` line.

use csv::{ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};

use crate::error::{BistroError, BistroResult};
use crate::models::{MenuItem, MenuItemId, Money};

const REVENUE_LABEL: &str = "Total Revenue";

/// Parse one line of `menu.txt`
pub fn parse_menu_line(line: &str) -> BistroResult<MenuItem> {
    let record = read_record(line)?;
    if record.len() != 4 {
        return Err(BistroError::parse(
            line,
            format!("expected 4 fields, found {}", record.len()),
        ));
    }

    let id: MenuItemId = record[0]
        .parse()
        .map_err(|e| BistroError::parse(line, format!("invalid id: {}", e)))?;

    let name = &record[1];
    if name.is_empty() {
        return Err(BistroError::parse(line, "missing name"));
    }

    let price = Money::parse(&record[3]).map_err(|e| BistroError::parse(line, e.to_string()))?;
    if price.is_negative() {
        return Err(BistroError::parse(line, "negative price"));
    }

    Ok(MenuItem::with_id(id, name, &record[2], price))
}

/// Render a menu item as a `menu.txt` line
///
/// Fields holding quote characters are quoted so they read back unchanged.
pub fn format_menu_line(item: &MenuItem) -> BistroResult<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let id = item.id.to_string();
    let price = item.price.to_decimal_string();
    writer
        .write_record([
            id.as_str(),
            item.name.as_str(),
            item.description.as_str(),
            price.as_str(),
        ])
        .map_err(|e| BistroError::Storage(format!("Failed to encode menu item {}: {}", item.id, e)))?;

    let bytes = writer
        .into_inner()
        .map_err(|e| BistroError::Storage(format!("Failed to encode menu item {}: {}", item.id, e)))?;
    let line = String::from_utf8(bytes)
        .map_err(|e| BistroError::Storage(format!("Failed to encode menu item {}: {}", item.id, e)))?;

    Ok(line.trim_end_matches('\n').to_string())
}

/// Parse the `Total Revenue = <decimal>` header line
pub fn parse_revenue_line(line: &str) -> BistroResult<Money> {
    let (label, amount) = line
        .split_once('=')
        .ok_or_else(|| BistroError::parse(line, "missing '='"))?;

    if label.trim() != REVENUE_LABEL {
        return Err(BistroError::parse(line, "not a revenue line"));
    }

    Money::parse(amount).map_err(|e| BistroError::parse(line, e.to_string()))
}

/// Render the revenue header line
pub fn format_revenue_line(total: Money) -> String {
    format!("{} = {}", REVENUE_LABEL, total.to_decimal_string())
}

fn read_record(line: &str) -> BistroResult<StringRecord> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(Ok(record)) => Ok(record),
        Some(Err(e)) => Err(BistroError::parse(line, e.to_string())),
        None => Err(BistroError::parse(line, "empty line")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_line() {
        let item = parse_menu_line("1,Burger,Classic beef burger,8.99").unwrap();
        assert_eq!(item.id.value(), 1);
        assert_eq!(item.name, "Burger");
        assert_eq!(item.description, "Classic beef burger");
        assert_eq!(item.price, Money::from_cents(899));
    }

    #[test]
    fn test_parse_menu_line_trims_fields() {
        let item = parse_menu_line(" 2 , Fries , Crispy fries , 3.50 ").unwrap();
        assert_eq!(item.name, "Fries");
        assert_eq!(item.price, Money::from_cents(350));
    }

    #[test]
    fn test_parse_menu_line_rejects_malformed() {
        for line in [
            "",
            "1,Burger,8.99",
            "1,Burger,Classic,8.99,extra",
            "x,Burger,Classic,8.99",
            "1,,Classic,8.99",
            "1,Burger,Classic,cheap",
            "1,Burger,Classic,-2.00",
        ] {
            let err = parse_menu_line(line).unwrap_err();
            assert!(matches!(err, BistroError::Parse { .. }), "{line:?}");
        }
    }

    #[test]
    fn test_menu_line_round_trip() {
        let line = "3,Soda,Fizzy,1.50";
        assert_eq!(format_menu_line(&parse_menu_line(line).unwrap()).unwrap(), line);
    }

    #[test]
    fn test_menu_line_keeps_quotes() {
        let item = MenuItem::with_id(
            MenuItemId::from_raw(3),
            "\"Big\" Burger",
            "\"House\" fries",
            Money::from_cents(350),
        );

        let line = format_menu_line(&item).unwrap();
        assert_eq!(parse_menu_line(&line).unwrap(), item);
    }

    #[test]
    fn test_parse_menu_line_skips_huge_price() {
        let err = parse_menu_line("2,Gold,Huge,100000000000000000.00").unwrap_err();
        assert!(matches!(err, BistroError::Parse { .. }));
    }

    #[test]
    fn test_revenue_line() {
        assert_eq!(
            parse_revenue_line("Total Revenue = 12.50").unwrap(),
            Money::from_cents(1250)
        );
        assert_eq!(
            parse_revenue_line("Total Revenue = 40.000000").unwrap(),
            Money::from_cents(4000)
        );
        assert_eq!(format_revenue_line(Money::from_cents(1250)), "Total Revenue = 12.50");
    }

    #[test]
    fn test_revenue_line_rejects_other_text() {
        assert!(parse_revenue_line("Order ID: 1, Customer Name: Ada").is_err());
        assert!(parse_revenue_line("Tips = 3.00").is_err());
        assert!(parse_revenue_line("Total Revenue = lots").is_err());
        assert!(parse_revenue_line("Total Revenue = 100000000000000000.00").is_err());
    }
}
