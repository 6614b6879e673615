//! Price calculation and the order recap.
//!
//! Everything here is a pure function of [`OrderState`]; the session recomputes the
//! whole recap after each change instead of patching it.

use crate::model::{Amount, Catalog, OptionLines, OrderKind, OrderState, Summary, SummaryContent};
use tracing::warn;

pub const CURRENCY_SUFFIX: &str = "€ TTC";
pub const NO_OPTIONS: &str = "Aucune option";

/// `base + photos × Σ option surcharges`.
pub fn compute_total(state: &OrderState) -> Amount {
    let per_photo = state
        .options()
        .iter()
        .fold(0, |sum: Amount, o| sum.saturating_add(o.per_photo_price));
    state
        .base_price()
        .saturating_add(state.photo_count().saturating_mul(per_photo))
}

/// Two decimals, with a whole-number `.00` dropped: `13.9 → "13.90"`, `13.0 → "13"`.
/// Exact half-cent values round up: `1.125 → "1.13"`.
pub fn format_amount(value: f64) -> String {
    // Only multiples of 1/8 can sit exactly on a half cent, and scaling those by 100
    // is exact. Anything else is already rounded correctly by the formatter.
    let value = if (value * 8.0).fract() == 0.0 {
        (value * 100.0).round() / 100.0
    } else {
        value
    };
    let fixed = format!("{value:.2}");
    match fixed.strip_suffix(".00") {
        Some(whole) => whole.to_string(),
        None => fixed,
    }
}

pub fn format_price(amount: Amount) -> String {
    format!("{}{CURRENCY_SUFFIX}", format_amount(f64::from(amount)))
}

/// Builds the recap block for the current state.
pub fn render_summary(state: &OrderState, catalog: &Catalog) -> Summary {
    let (title, detail) = match state.kind() {
        OrderKind::None => return Summary::Empty,
        OrderKind::Pack(pack) => {
            let title = catalog.pack_name(pack).map(str::to_string).unwrap_or_else(|| {
                warn!(%pack, "Pack missing from catalog");
                pack.to_string()
            });
            let per_photo = f64::from(state.base_price()) / f64::from(state.photo_count());
            (
                title,
                format!("Soit {}{CURRENCY_SUFFIX} / photo", format_amount(per_photo)),
            )
        }
        OrderKind::Solo(service) => {
            let title = catalog
                .service_name(service)
                .map(str::to_string)
                .unwrap_or_else(|| {
                    warn!(%service, "Service missing from catalog");
                    service.to_string()
                });
            (
                title,
                format!("1 photo à {}{CURRENCY_SUFFIX}", state.base_price()),
            )
        }
    };

    let options = if state.options().is_empty() {
        OptionLines::Placeholder(NO_OPTIONS.to_string())
    } else {
        OptionLines::Items(
            state
                .options()
                .iter()
                .map(|o| {
                    let name = catalog.option_name(&o.id).unwrap_or_else(|| {
                        warn!(option = %o.id, "Option missing from catalog");
                        o.id.as_str()
                    });
                    format!("✓ {name}")
                })
                .collect(),
        )
    };

    Summary::Filled(SummaryContent {
        title,
        detail,
        options,
        total: format_price(compute_total(state)),
    })
}
