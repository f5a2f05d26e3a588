/// Price quoted when the service type is not in the catalogue.
pub const DEFAULT_PRICE: f64 = 100.0;

/// Fixed estimate for a quote, keyed by service type.
pub fn estimate_price(service_type: &str) -> f64 {
    match service_type {
        "renovation_complete" => 150.0,
        "polissage" => 80.0,
        "personnalisation" => 200.0,
        "reparation" => 120.0,
        "renovation" => 150.0,
        "custom" => 200.0,
        _ => DEFAULT_PRICE,
    }
}
