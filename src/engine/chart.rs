//! Pie-chart segments for the value and income distributions.

use super::aggregate::AssetClassTotals;
use crate::domain::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

const FULL_CIRCLE_DEGREES: Decimal = Decimal::new(dec!(360));
const FULL_CIRCLE_MIN_PERCENT: Decimal = Decimal::new(dec!(99.9));

/// One labelled input value for a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartInput {
    pub label: String,
    pub value: Decimal,
    pub color: String,
}

impl ChartInput {
    pub fn new(label: impl Into<String>, value: Decimal, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSegment {
    pub label: String,
    pub value: Decimal,
    pub color: String,
    pub percentage: Decimal,
    /// Degrees clockwise from the top; the first segment starts at 0.
    pub start_angle: Decimal,
    pub end_angle: Decimal,
}

/// Chart-ready segments. An empty segment list means "no data".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub segments: Vec<ChartSegment>,
    pub total: Decimal,
    /// A lone segment covering the whole chart must be drawn as a circle,
    /// not as an arc whose start and end points coincide.
    pub is_full_circle: bool,
}

impl Chart {
    pub fn has_data(&self) -> bool {
        !self.segments.is_empty()
    }
}

/// Turns `(label, value)` inputs into percentage and angle segments.
pub struct ChartDataBuilder;

impl ChartDataBuilder {
    /// Build segments in input order, dropping non-positive values.
    pub fn build(inputs: impl IntoIterator<Item = ChartInput>) -> Chart {
        let kept: Vec<ChartInput> = inputs
            .into_iter()
            .filter(|input| input.value.is_positive())
            .collect();

        let total: Decimal = kept.iter().map(|input| input.value).sum();
        if total.is_zero() {
            return Chart::default();
        }

        let mut current_angle = Decimal::zero();
        let segments: Vec<ChartSegment> = kept
            .into_iter()
            .map(|input| {
                let percentage = input.value.percent_of(total);
                let sweep = percentage / Decimal::hundred() * FULL_CIRCLE_DEGREES;
                let start_angle = current_angle;
                let end_angle = current_angle + sweep;
                current_angle = end_angle;

                ChartSegment {
                    label: input.label,
                    value: input.value,
                    color: input.color,
                    percentage,
                    start_angle,
                    end_angle,
                }
            })
            .collect();

        let is_full_circle =
            segments.len() == 1 && segments[0].percentage >= FULL_CIRCLE_MIN_PERCENT;

        Chart {
            segments,
            total,
            is_full_circle,
        }
    }

    /// Value distribution across asset classes.
    pub fn value_chart(totals: &AssetClassTotals) -> Chart {
        Self::build(totals.classes.iter().map(|c| {
            ChartInput::new(c.class.value_label(), c.value, c.class.color())
        }))
    }

    /// Monthly income distribution across asset classes.
    pub fn income_chart(totals: &AssetClassTotals) -> Chart {
        Self::build(totals.classes.iter().map(|c| {
            ChartInput::new(c.class.income_label(), c.monthly_income, c.class.color())
        }))
    }
}
