use chrono::Utc;

use super::calculator::convert;
use crate::models::swap::{Conversion, SwapReceipt, SwapStatus};
use crate::models::token::Token;
use crate::utils::helper::{is_acceptable_amount_input, parse_amount};

/// User intents against the swap form
#[derive(Debug, Clone, PartialEq)]
pub enum SwapEvent {
    SelectFrom(Token),
    SelectTo(Token),
    EditAmount(String),
    /// Swap the two sides, carrying the destination amount over as the new source
    Reverse,
    Commit,
    /// Settlement delay elapsed
    Settled,
    /// Pending settlement was cancelled before it elapsed
    Cancelled,
}

/// Snapshot of the swap form.
///
/// Every transition goes through [`SwapForm::apply`], which returns the next
/// snapshot with the conversion recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapForm {
    pub from: Option<Token>,
    pub to: Option<Token>,
    pub source_amount: String,
    pub destination_amount: String,
    pub error: Option<String>,
    pub status: SwapStatus,
    ceiling: f64,
}

impl SwapForm {
    /// Create an empty form with the given balance ceiling for the source side
    pub fn new(ceiling: f64) -> Self {
        Self {
            from: None,
            to: None,
            source_amount: String::new(),
            destination_amount: String::new(),
            error: None,
            status: SwapStatus::Idle,
            ceiling,
        }
    }

    /// Preselect both sides
    pub fn with_tokens(mut self, from: Option<Token>, to: Option<Token>) -> Self {
        self.from = from;
        self.to = to;
        self.recompute()
    }

    /// Show `message` as the form error until the next recompute
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    pub fn is_pending(&self) -> bool {
        self.status == SwapStatus::Pending
    }

    /// Apply an event and return the next snapshot
    pub fn apply(self, event: SwapEvent) -> Self {
        if self.is_pending() {
            return match event {
                SwapEvent::Settled => Self {
                    source_amount: String::new(),
                    status: SwapStatus::Idle,
                    ..self
                }
                .recompute(),
                SwapEvent::Cancelled => Self {
                    status: SwapStatus::Idle,
                    ..self
                },
                // edits are locked until settlement
                _ => self,
            };
        }

        match event {
            SwapEvent::SelectFrom(token) => self.select_from(token).recompute(),
            SwapEvent::SelectTo(token) => self.select_to(token).recompute(),
            SwapEvent::EditAmount(value) => {
                if is_acceptable_amount_input(&value) {
                    Self {
                        source_amount: value,
                        ..self
                    }
                    .recompute()
                } else {
                    self
                }
            }
            SwapEvent::Reverse => self.reverse().recompute(),
            SwapEvent::Commit => {
                if self.can_submit() {
                    Self {
                        status: SwapStatus::Pending,
                        ..self
                    }
                } else {
                    self
                }
            }
            SwapEvent::Settled | SwapEvent::Cancelled => self,
        }
    }

    fn select_from(mut self, token: Token) -> Self {
        if self.to.as_ref().map_or(false, |to| to.same_asset(&token)) {
            self.to = self.from.take();
        }
        self.from = Some(token);
        self
    }

    fn select_to(mut self, token: Token) -> Self {
        if self.from.as_ref().map_or(false, |from| from.same_asset(&token)) {
            self.from = self.to.take();
        }
        self.to = Some(token);
        self
    }

    fn reverse(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            source_amount: self.destination_amount,
            destination_amount: String::new(),
            ..self
        }
    }

    /// Evaluate the calculator for the current inputs
    pub fn conversion(&self) -> Conversion {
        convert(
            &self.source_amount,
            self.from.as_ref(),
            self.to.as_ref(),
            self.ceiling,
        )
    }

    fn recompute(self) -> Self {
        let conversion = self.conversion();
        Self {
            destination_amount: conversion.destination_amount.unwrap_or_default(),
            error: conversion.validation.message().map(str::to_string),
            ..self
        }
    }

    /// Whether a commit would be accepted
    pub fn can_submit(&self) -> bool {
        let positive = parse_amount(&self.source_amount).map_or(false, |v| v > 0.0);
        positive && self.error.is_none() && !self.is_pending()
    }

    /// Label of the submit action
    pub fn action_label(&self) -> &str {
        if self.is_pending() {
            "Swapping..."
        } else if let Some(error) = &self.error {
            error.as_str()
        } else {
            "Swap"
        }
    }

    /// Receipt for the swap as currently entered, if both sides are selected
    pub fn receipt(&self) -> Option<SwapReceipt> {
        Some(SwapReceipt {
            from: self.from.clone()?,
            to: self.to.clone()?,
            source_amount: self.source_amount.clone(),
            destination_amount: self.destination_amount.clone(),
            committed_at: Utc::now(),
        })
    }
}
