//! The `browse` subcommand: fetch listings, filter and sort them locally,
//! and print an aligned table.

use clap::{Args, ValueEnum};
use rust_decimal::Decimal;

use uogos_client::MarketClient;
use uogos_core::{filter_and_sort, load_app_config, Listing, ListingFilters, SortKey, Unit};

#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Free-text search forwarded to the backend.
    #[arg(long)]
    pub query: Option<String>,

    /// Keep only listings in this category.
    #[arg(long)]
    pub category: Option<i64>,

    /// Keep only listings in this city (case-insensitive).
    #[arg(long)]
    pub city: Option<String>,

    /// Inclusive lower price bound.
    #[arg(long)]
    pub price_min: Option<Decimal>,

    /// Inclusive upper price bound.
    #[arg(long)]
    pub price_max: Option<Decimal>,

    /// Keep only listings priced per this unit.
    #[arg(long, value_enum)]
    pub unit: Option<UnitArg>,

    /// Ordering of the result.
    #[arg(long, value_enum, default_value = "newest")]
    pub sort: SortArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitArg {
    Kg,
    G,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Kg => Unit::Kg,
            UnitArg::G => Unit::G,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    PriceAsc,
    PriceDesc,
    TitleAsc,
    TitleDesc,
    Newest,
    Oldest,
    Unsorted,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::PriceAsc => SortKey::PriceAsc,
            SortArg::PriceDesc => SortKey::PriceDesc,
            SortArg::TitleAsc => SortKey::TitleAsc,
            SortArg::TitleDesc => SortKey::TitleDesc,
            SortArg::Newest => SortKey::Newest,
            SortArg::Oldest => SortKey::Oldest,
            SortArg::Unsorted => SortKey::Unsorted,
        }
    }
}

pub async fn run(args: BrowseArgs) -> anyhow::Result<()> {
    let config = load_app_config()?;
    let client = MarketClient::from_config(&config)?;

    let listings = client.list_listings(args.query.as_deref()).await?;
    tracing::info!(count = listings.len(), "browse: fetched listings");

    let filters = filters_from_args(&args);
    let out = filter_and_sort(&listings, &filters, SortKey::from(args.sort));
    tracing::info!(
        kept = out.len(),
        sort = %SortKey::from(args.sort),
        "browse: applied filters"
    );

    if out.is_empty() {
        println!("No results");
        return Ok(());
    }
    print!("{}", render_listings(&out));
    Ok(())
}

fn filters_from_args(args: &BrowseArgs) -> ListingFilters {
    ListingFilters {
        category_id: args.category,
        city: args.city.clone(),
        price_min: args.price_min,
        price_max: args.price_max,
        unit: args.unit.map(Unit::from),
    }
}

fn render_listings(listings: &[Listing]) -> String {
    let mut rows: Vec<[String; 6]> = Vec::with_capacity(listings.len() + 1);
    rows.push([
        "ID".to_string(),
        "TITLE".to_string(),
        "PRICE".to_string(),
        "UNIT".to_string(),
        "CITY".to_string(),
        "CREATED".to_string(),
    ]);
    for listing in listings {
        rows.push([
            listing.id.to_string(),
            listing.title.clone(),
            listing
                .price
                .map_or_else(|| "-".to_string(), |p| p.to_string()),
            listing
                .unit
                .map_or_else(|| "-".to_string(), |u| u.to_string()),
            listing.city.clone().unwrap_or_else(|| "-".to_string()),
            listing
                .created_at
                .clone()
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }

    let mut widths = [0usize; 6];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in &rows {
        let line = row
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{cell:<width$}", width = *width))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use uogos_core::ListingStatus;

    fn args() -> BrowseArgs {
        BrowseArgs {
            query: None,
            category: None,
            city: None,
            price_min: None,
            price_max: None,
            unit: None,
            sort: SortArg::Newest,
        }
    }

    fn listing(id: i64, title: &str, price: Option<i64>, city: Option<&str>) -> Listing {
        Listing {
            id,
            title: title.to_string(),
            description: None,
            price: price.map(Decimal::from),
            city: city.map(str::to_string),
            category_id: 10,
            unit: Some(Unit::Kg),
            status: ListingStatus::Approved,
            created_at: Some("2024-01-02T00:00:00Z".to_string()),
            updated_at: None,
        }
    }

    #[test]
    fn filters_from_args_maps_every_field() {
        let mut args = args();
        args.category = Some(10);
        args.city = Some("Vilnius".to_string());
        args.price_min = Some(Decimal::from(4));
        args.price_max = Some(Decimal::from(6));
        args.unit = Some(UnitArg::G);

        let filters = filters_from_args(&args);
        assert_eq!(filters.category_id, Some(10));
        assert_eq!(filters.city.as_deref(), Some("Vilnius"));
        assert_eq!(filters.price_min, Some(Decimal::from(4)));
        assert_eq!(filters.price_max, Some(Decimal::from(6)));
        assert_eq!(filters.unit, Some(Unit::G));
    }

    #[test]
    fn filters_from_args_defaults_to_no_constraints() {
        assert_eq!(filters_from_args(&args()), ListingFilters::default());
    }

    #[test]
    fn sort_arg_maps_onto_every_sort_key() {
        let pairs = [
            (SortArg::PriceAsc, SortKey::PriceAsc),
            (SortArg::PriceDesc, SortKey::PriceDesc),
            (SortArg::TitleAsc, SortKey::TitleAsc),
            (SortArg::TitleDesc, SortKey::TitleDesc),
            (SortArg::Newest, SortKey::Newest),
            (SortArg::Oldest, SortKey::Oldest),
            (SortArg::Unsorted, SortKey::Unsorted),
        ];
        for (arg, key) in pairs {
            assert_eq!(SortKey::from(arg), key);
        }
    }

    #[test]
    fn render_listings_aligns_columns_and_fills_gaps() {
        let listings = vec![
            listing(1, "Blueberry", Some(5), Some("Vilnius")),
            listing(42, "Strawberry", None, None),
        ];
        let table = render_listings(&listings);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].contains("Blueberry"));
        assert!(lines[2].contains("Strawberry"));
        // Missing price and city render as placeholders.
        assert!(lines[2].contains('-'));
        // The title column starts at the same offset in every row.
        let offset = lines[0].find("TITLE").unwrap();
        assert_eq!(lines[1].find("Blueberry").unwrap(), offset);
        assert_eq!(lines[2].find("Strawberry").unwrap(), offset);
    }

    #[test]
    fn render_listings_header_only_for_empty_input() {
        let table = render_listings(&[]);
        assert_eq!(table.lines().count(), 1);
    }
}
