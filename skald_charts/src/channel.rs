// Copyright 2026 the Skald Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual channels: accessor + domain bindings from records to scales.
//!
//! A channel goes through two phases. Declared, it holds an accessor and an
//! optional explicit domain; [`apply_domain`](QuantitativeChannel::apply_domain)
//! freezes the domain (inferring it from data when needed) exactly once, when
//! a mark is built. Bound via [`range`](QuantitativeChannel::range), it pairs
//! the frozen domain with a pixel range and answers per-record position
//! lookups, returning `None` for anything unmappable.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use skald_scales::{ScaleBand, ScaleContinuous, ScaleKind};

/// The declared kind of data a channel carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisualPropertyType {
    /// Continuous numeric data.
    Quantitative,
    /// Discrete category data.
    Categorical,
}

type QuantitativeAccessor<R> = Arc<dyn Fn(&R) -> Option<f64> + Send + Sync>;
type CategoricalAccessor<R> = Arc<dyn Fn(&R) -> Option<String> + Send + Sync>;

/// Binds a numeric record accessor to a continuous scale.
pub struct QuantitativeChannel<R> {
    accessor: QuantitativeAccessor<R>,
    domain: Option<(f64, f64)>,
    scale_kind: ScaleKind,
}

impl<R> QuantitativeChannel<R> {
    /// Creates a channel from an infallible accessor.
    pub fn new(accessor: impl Fn(&R) -> f64 + Send + Sync + 'static) -> Self {
        Self::optional(move |record| Some(accessor(record)))
    }

    /// Creates a channel from an accessor that may have no value for a record.
    pub fn optional(accessor: impl Fn(&R) -> Option<f64> + Send + Sync + 'static) -> Self {
        Self {
            accessor: Arc::new(accessor),
            domain: None,
            scale_kind: ScaleKind::Linear,
        }
    }

    /// Sets an explicit domain, fixing it before any data is seen.
    pub fn with_domain(mut self, min: f64, max: f64) -> Self {
        self.domain = Some((min, max));
        self
    }

    /// Sets the continuous scale kind (linear by default).
    pub fn with_scale(mut self, kind: ScaleKind) -> Self {
        self.scale_kind = kind;
        self
    }

    /// Returns the frozen domain, if one has been set or inferred.
    pub fn domain(&self) -> Option<(f64, f64)> {
        self.domain
    }

    /// Returns the configured scale kind.
    pub fn scale_kind(&self) -> ScaleKind {
        self.scale_kind
    }

    /// Returns a channel whose domain is frozen.
    ///
    /// An already-frozen domain is kept as-is; otherwise the domain becomes
    /// the min/max of the accessor's finite values over `data`. Data with no
    /// finite values leaves the domain unset, and every later lookup through
    /// the channel returns `None`.
    pub fn apply_domain(&self, data: &[R]) -> Self {
        if self.domain.is_some() {
            return self.clone();
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for record in data {
            let Some(v) = (self.accessor)(record) else {
                continue;
            };
            if !v.is_finite() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
        }
        let domain = (min.is_finite() && max.is_finite()).then_some((min, max));
        Self {
            accessor: Arc::clone(&self.accessor),
            domain,
            scale_kind: self.scale_kind,
        }
    }

    /// Attaches a pixel range to the frozen domain.
    pub fn range(&self, lower: f64, higher: f64) -> ScaledChannel<R> {
        let scale = self
            .domain
            .map(|domain| ScaleContinuous::new(self.scale_kind, domain, (lower, higher)));
        ScaledChannel {
            accessor: Arc::clone(&self.accessor),
            scale,
        }
    }
}

impl<R> Clone for QuantitativeChannel<R> {
    fn clone(&self) -> Self {
        Self {
            accessor: Arc::clone(&self.accessor),
            domain: self.domain,
            scale_kind: self.scale_kind,
        }
    }
}

impl<R> fmt::Debug for QuantitativeChannel<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuantitativeChannel")
            .field("domain", &self.domain)
            .field("scale_kind", &self.scale_kind)
            .finish_non_exhaustive()
    }
}

/// A quantitative channel bound to a pixel range, ready for per-record
/// lookups.
pub struct ScaledChannel<R> {
    accessor: QuantitativeAccessor<R>,
    scale: Option<ScaleContinuous>,
}

impl<R> ScaledChannel<R> {
    /// Returns the pixel position for a record's value.
    ///
    /// `None` when the accessor has no value, the value is non-finite or
    /// unusable for the scale (log scales reject non-positive values), the
    /// channel never acquired a domain, or the computed position is not
    /// finite.
    pub fn scaled_value(&self, record: &R) -> Option<f64> {
        let scale = self.scale?;
        let v = (self.accessor)(record)?;
        if !v.is_finite() {
            return None;
        }
        if scale.positive_only() && v <= 0.0 {
            return None;
        }
        let position = scale.map(v);
        position.is_finite().then_some(position)
    }

    /// Returns the underlying scale, if the channel acquired a domain.
    pub fn scale(&self) -> Option<&ScaleContinuous> {
        self.scale.as_ref()
    }
}

impl<R> Clone for ScaledChannel<R> {
    fn clone(&self) -> Self {
        Self {
            accessor: Arc::clone(&self.accessor),
            scale: self.scale,
        }
    }
}

impl<R> fmt::Debug for ScaledChannel<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaledChannel")
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

/// Binds a category record accessor to a band scale.
pub struct CategoricalChannel<R> {
    accessor: CategoricalAccessor<R>,
    domain: Option<Vec<String>>,
}

impl<R> CategoricalChannel<R> {
    /// Creates a channel from an infallible accessor.
    pub fn new(accessor: impl Fn(&R) -> String + Send + Sync + 'static) -> Self {
        Self::optional(move |record| Some(accessor(record)))
    }

    /// Creates a channel from an accessor that may have no value for a record.
    pub fn optional(accessor: impl Fn(&R) -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            accessor: Arc::new(accessor),
            domain: None,
        }
    }

    /// Sets an explicit category list, fixing it before any data is seen.
    ///
    /// Order is preserved; duplicates are dropped.
    pub fn with_domain<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut distinct: Vec<String> = Vec::new();
        for category in categories {
            let category = category.into();
            if !distinct.contains(&category) {
                distinct.push(category);
            }
        }
        self.domain = Some(distinct);
        self
    }

    /// Returns the frozen category list, if one has been set or inferred.
    pub fn domain(&self) -> Option<&[String]> {
        self.domain.as_deref()
    }

    /// Returns a channel whose category list is frozen.
    ///
    /// An already-frozen list is kept as-is; otherwise the list becomes the
    /// distinct categories over `data` in first-appearance order.
    pub fn apply_domain(&self, data: &[R]) -> Self {
        if self.domain.is_some() {
            return self.clone();
        }
        let mut distinct: Vec<String> = Vec::new();
        for record in data {
            let Some(category) = (self.accessor)(record) else {
                continue;
            };
            if !distinct.contains(&category) {
                distinct.push(category);
            }
        }
        Self {
            accessor: Arc::clone(&self.accessor),
            domain: Some(distinct),
        }
    }

    /// Attaches a pixel range to the frozen category list.
    pub fn range(&self, lower: f64, higher: f64) -> ScaledBandChannel<R> {
        let categories: Vec<String> = self.domain.clone().unwrap_or_default();
        let scale = ScaleBand::new((lower, higher), categories.len());
        ScaledBandChannel {
            accessor: Arc::clone(&self.accessor),
            categories,
            scale,
        }
    }
}

impl<R> Clone for CategoricalChannel<R> {
    fn clone(&self) -> Self {
        Self {
            accessor: Arc::clone(&self.accessor),
            domain: self.domain.clone(),
        }
    }
}

impl<R> fmt::Debug for CategoricalChannel<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoricalChannel")
            .field("domain", &self.domain)
            .finish_non_exhaustive()
    }
}

/// A categorical channel bound to a pixel range, ready for per-record
/// lookups.
pub struct ScaledBandChannel<R> {
    accessor: CategoricalAccessor<R>,
    categories: Vec<String>,
    scale: ScaleBand,
}

impl<R> ScaledBandChannel<R> {
    fn index_of(&self, record: &R) -> Option<usize> {
        let category = (self.accessor)(record)?;
        self.categories.iter().position(|c| *c == category)
    }

    /// Returns the center of the record's category band.
    ///
    /// `None` when the accessor has no value or the category is not in the
    /// frozen domain.
    pub fn scaled_value(&self, record: &R) -> Option<f64> {
        Some(self.scale.center(self.index_of(record)?))
    }

    /// Returns the `(start, end)` band interval for the record's category.
    pub fn band(&self, record: &R) -> Option<(f64, f64)> {
        Some(self.scale.band(self.index_of(record)?))
    }

    /// Returns the frozen categories in band order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Returns the underlying band scale.
    pub fn scale(&self) -> &ScaleBand {
        &self.scale
    }
}

impl<R> Clone for ScaledBandChannel<R> {
    fn clone(&self) -> Self {
        Self {
            accessor: Arc::clone(&self.accessor),
            categories: self.categories.clone(),
            scale: self.scale,
        }
    }
}

impl<R> fmt::Debug for ScaledBandChannel<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaledBandChannel")
            .field("categories", &self.categories)
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}
