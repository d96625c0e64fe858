use shop_contracts::PaymentMethod;

/// Pricing and checkout settings for a store instance.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Fraction of the subtotal charged as tax.
    pub tax_rate: f64,
    /// Flat shipping charge per order.
    pub shipping_cost: f64,
    /// Payment methods checkout accepts.
    pub payment_methods: Vec<PaymentMethod>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            tax_rate: 0.08,
            shipping_cost: 0.0,
            payment_methods: vec![PaymentMethod::Card, PaymentMethod::CashOnDelivery],
        }
    }
}

impl StoreConfig {
    /// Defaults overridden by `SHOP_TAX_RATE` and `SHOP_SHIPPING_COST`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Malformed or negative values are ignored and the default kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(rate) = non_negative(lookup("SHOP_TAX_RATE")) {
            cfg.tax_rate = rate;
        }
        if let Some(cost) = non_negative(lookup("SHOP_SHIPPING_COST")) {
            cfg.shipping_cost = cost;
        }
        cfg
    }

    pub fn accepts(&self, method: PaymentMethod) -> bool {
        self.payment_methods.contains(&method)
    }
}

fn non_negative(raw: Option<String>) -> Option<f64> {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
}
