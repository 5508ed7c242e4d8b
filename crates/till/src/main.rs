fn main() -> anyhow::Result<()> {
    shopcheck_observability::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (catalog, selections) = shopcheck_till::parse_args(&args)?;
    let config = shopcheck_till::receipt_config_from_env();

    let available = shopcheck_till::load_catalog(&catalog)?;
    let result = shopcheck_till::checkout(&available, &selections, &config)?;

    println!("order {}: total {}", result.order_number, result.total);
    if !result.receipt.is_written() {
        tracing::warn!(order = %result.order_number, "receipt was not written");
    }
    Ok(())
}
