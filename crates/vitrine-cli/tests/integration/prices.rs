//! Integration tests for the price-cell update path.

use vitrine_core::Error;
use vitrine_render::update_price_cells;
use vitrine_sources::mock::MockPriceSource;
use vitrine_sources::PriceSource;

const README: &str = "\
# Prices

<table>
<tr><td>Bitcoin</td><td id=\"#BTC\">0.00</td></tr>
<tr><td>Ethereum</td><td id=\"#ETH\">0.00</td></tr>
</table>
";

async fn fetch_quotes(
    source: &dyn PriceSource,
    symbols: &[&str],
) -> Result<Vec<(String, String)>, Error> {
    let mut quotes = Vec::new();
    for symbol in symbols {
        let quote = source.quote(symbol).await?;
        quotes.push((symbol.to_string(), quote.formatted()));
    }
    Ok(quotes)
}

#[tokio::test]
async fn test_price_update_roundtrip_through_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let readme_path = dir.path().join("README.md");
    std::fs::write(&readme_path, README).expect("seed readme");

    let source = MockPriceSource::new(&[("BTC", 67123.456), ("ETH", 3456.789)]);
    let quotes = fetch_quotes(&source, &["BTC", "ETH"]).await.expect("quotes");

    let readme = std::fs::read_to_string(&readme_path).expect("read");
    let updated = update_price_cells(&readme, &quotes).expect("update");
    std::fs::write(&readme_path, &updated).expect("write");

    let written = std::fs::read_to_string(&readme_path).expect("read back");
    assert!(written.contains("<td id=\"#BTC\">67,123.46</td>"));
    assert!(written.contains("<td id=\"#ETH\">3,456.79</td>"));
    assert!(written.contains("<td>Bitcoin</td>"));
}

#[tokio::test]
async fn test_failed_quote_aborts_before_any_write() {
    let dir = tempfile::tempdir().expect("tempdir");
    let readme_path = dir.path().join("README.md");
    std::fs::write(&readme_path, README).expect("seed readme");

    // ETH is not quotable; the whole run must fail with no write.
    let source = MockPriceSource::new(&[("BTC", 67123.456)]);
    let result = fetch_quotes(&source, &["BTC", "ETH"]).await;
    assert!(matches!(result, Err(Error::Fetch { .. })));

    let preserved = std::fs::read_to_string(&readme_path).expect("read back");
    assert_eq!(preserved, README);
}

#[tokio::test]
async fn test_unknown_cell_fails_whole_update() {
    let source = MockPriceSource::new(&[("DOGE", 0.12)]);
    let quotes = fetch_quotes(&source, &["DOGE"]).await.expect("quotes");

    let err = update_price_cells(README, &quotes).unwrap_err();
    assert!(matches!(err, Error::MissingValue { .. }));
}
