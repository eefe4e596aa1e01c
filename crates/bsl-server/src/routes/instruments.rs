use axum::Json;
use axum::extract::{Path, Query};
use serde::{Deserialize, Serialize};

use bsl_instruments::scoring::{Band, BandPredicate, BandTable, Polarity};
use bsl_instruments::{Instrument, all_instruments, get_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
    items: usize,
    banded: bool,
}

/// Answer key for one item.
#[derive(Serialize)]
pub struct ItemKey {
    code: String,
    polarity: Polarity,
}

/// A subscale with its norm table and the items feeding it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscaleKey {
    id: String,
    name: String,
    /// Scaled score indexed by raw total.
    baremo: Vec<i32>,
    items: Vec<ItemKey>,
}

/// One interpretation rule. Bounds are inclusive; an open bound is `None`.
#[derive(Serialize)]
pub struct BandRule {
    min: Option<i32>,
    max: Option<i32>,
    interpretacion: &'static str,
    apto: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentDetail {
    id: String,
    name: String,
    subscales: Vec<SubscaleKey>,
    /// Rules in evaluation order, then the fallback. Empty for instruments
    /// not read through bands.
    bands: Vec<BandRule>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DetailParams {
    #[serde(default)]
    pub cod_empresa: Option<String>,
}

fn rule(predicate: Option<BandPredicate>, band: Band) -> BandRule {
    let (min, max) = match predicate {
        Some(BandPredicate::Between(min, max)) => (Some(min), Some(max)),
        Some(BandPredicate::Above(threshold)) => (Some(threshold + 1), None),
        None => (None, None),
    };
    BandRule {
        min,
        max,
        interpretacion: band.label,
        apto: band.admissible,
    }
}

fn band_rules(table: &BandTable) -> Vec<BandRule> {
    table
        .rules
        .iter()
        .map(|(predicate, band)| rule(Some(*predicate), *band))
        .chain(std::iter::once(rule(None, table.otherwise)))
        .collect()
}

fn subscale_keys(instrument: &dyn Instrument) -> Vec<SubscaleKey> {
    instrument
        .subscales()
        .iter()
        .map(|subscale| SubscaleKey {
            id: subscale.id.clone(),
            name: subscale.name.clone(),
            baremo: subscale.baremo.scaled.clone(),
            items: instrument
                .items()
                .iter()
                .filter(|item| item.subscale_id == subscale.id)
                .map(|item| ItemKey {
                    code: item.code.clone(),
                    polarity: item.polarity,
                })
                .collect(),
        })
        .collect()
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
            items: i.items().len(),
            banded: i.bands(None).is_some(),
        })
        .collect();
    Json(instruments)
}

/// Scoring key for one instrument: items by subscale with polarity, the
/// norm tables, and the interpretation bands for `?cod_empresa=`.
pub async fn get_instrument_detail(
    Path(id): Path<String>,
    Query(params): Query<DetailParams>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = get_instrument(&id)
        .ok_or_else(|| ApiError::NotFound(format!("instrument not found: {id}")))?;

    let company = params.cod_empresa.as_deref();
    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        subscales: subscale_keys(instrument.as_ref()),
        bands: instrument.bands(company).map(band_rules).unwrap_or_default(),
    }))
}
