use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use futures::future::{BoxFuture, FutureExt};
use log::{debug, info, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::PERCENTAGE_DECIMAL_PRECISION;
use crate::errors::{Error, Result};
use crate::events::{ValuationEvent, ValuationEventSink};
use crate::investments::{InstrumentKind, Investment, InvestmentRepositoryTrait};
use crate::investors::{InvestorInvestment, InvestorRepositoryTrait};
use crate::portfolio::valuation::{InstrumentValuation, PortfolioValuation};
use crate::quotes::QuoteRepositoryTrait;
use crate::transactions::{Transaction, TransactionKind, TransactionRepositoryTrait};

#[async_trait]
pub trait PortfolioValuationServiceTrait: Send + Sync {
    /// Values the investor's holdings as of `reference_date`.
    ///
    /// Fails only when the investor itself cannot be resolved; every
    /// per-instrument problem resolves that instrument to zero and is
    /// reported through the event sink.
    async fn calculate_portfolio_value(
        &self,
        investor_id: i32,
        reference_date: NaiveDate,
    ) -> Result<PortfolioValuation>;
}

#[derive(Clone)]
pub struct PortfolioValuationService {
    investor_repository: Arc<dyn InvestorRepositoryTrait>,
    investment_repository: Arc<dyn InvestmentRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    quote_repository: Arc<dyn QuoteRepositoryTrait>,
    events: Arc<dyn ValuationEventSink>,
}

impl PortfolioValuationService {
    pub fn new(
        investor_repository: Arc<dyn InvestorRepositoryTrait>,
        investment_repository: Arc<dyn InvestmentRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        quote_repository: Arc<dyn QuoteRepositoryTrait>,
        events: Arc<dyn ValuationEventSink>,
    ) -> Self {
        Self {
            investor_repository,
            investment_repository,
            transaction_repository,
            quote_repository,
            events,
        }
    }
}

#[async_trait]
impl PortfolioValuationServiceTrait for PortfolioValuationService {
    async fn calculate_portfolio_value(
        &self,
        investor_id: i32,
        reference_date: NaiveDate,
    ) -> Result<PortfolioValuation> {
        info!(
            "Calculating portfolio value for investor {} as of {}",
            investor_id, reference_date
        );

        let investor = self
            .investor_repository
            .get_investor_by_id(investor_id)
            .await?
            .ok_or_else(|| {
                warn!("Investor with ID {} not found", investor_id);
                Error::InvestorNotFound(investor_id)
            })?;

        let memberships = self
            .investor_repository
            .get_investor_investments(investor_id)
            .await?;
        if memberships.is_empty() {
            info!("No investments found for investor {}", investor_id);
            return Ok(PortfolioValuation::empty(
                investor.id,
                investor.code,
                reference_date,
            ));
        }

        let (total_value, mut instruments) = self
            .calculate_all_instrument_values(&memberships, investor_id, reference_date)
            .await?;
        Self::apply_portfolio_percentages(&mut instruments, total_value);

        info!(
            "Portfolio calculation complete for investor {}: total value {}",
            investor_id, total_value
        );

        Ok(PortfolioValuation {
            investor_id: investor.id,
            investor_code: investor.code,
            reference_date,
            calculation_timestamp: Utc::now(),
            total_value,
            instruments,
        })
    }
}

impl PortfolioValuationService {
    /// Values every held instrument, skipping ones that cannot be resolved
    /// or whose valuation fails. A single bad instrument never fails the
    /// whole portfolio.
    async fn calculate_all_instrument_values(
        &self,
        memberships: &[InvestorInvestment],
        investor_id: i32,
        reference_date: NaiveDate,
    ) -> Result<(Decimal, Vec<InstrumentValuation>)> {
        let mut total_value = Decimal::ZERO;
        let mut instruments = Vec::new();

        for membership in memberships {
            let investment = match self
                .investment_repository
                .get_investment_with_details(membership.investment_id)
                .await?
            {
                Some(investment) => investment,
                None => {
                    warn!(
                        "Investment with ID {} not found",
                        membership.investment_id
                    );
                    self.events.emit(ValuationEvent::MissingInstrument {
                        investment_id: membership.investment_id,
                    });
                    continue;
                }
            };

            // Fresh visited set per top-level instrument; the set is scoped
            // to one recursive descent and never shared across calls.
            let mut visited = HashSet::new();
            match self
                .calculate_investment_value(&investment, investor_id, reference_date, &mut visited)
                .await
            {
                Ok(value) if value > Decimal::ZERO => {
                    let instrument_type_name = self.resolve_kind_name(&investment).await;
                    instruments.push(InstrumentValuation {
                        instrument_id: investment.id,
                        instrument_code: investment.code.clone(),
                        instrument_type_name,
                        value,
                        percentage_of_portfolio: Decimal::ZERO,
                    });
                    total_value += value;
                }
                // Zero-valued holdings contribute nothing and are left out
                // of the breakdown.
                Ok(_) => {}
                Err(err) => {
                    warn!(
                        "Error calculating value for investment {}: {}",
                        investment.id, err
                    );
                    self.events.emit(ValuationEvent::ValuationFailed {
                        investment_id: investment.id,
                        error: err.to_string(),
                    });
                }
            }
        }

        Ok((total_value, instruments))
    }

    /// Display name for the breakdown: the kind record's name when it
    /// resolves, else the static name for known kind ids, else "Unknown".
    async fn resolve_kind_name(&self, investment: &Investment) -> String {
        let Some(kind_id) = investment.kind_id else {
            return "Unknown".to_string();
        };

        match self.investment_repository.get_investment_kind(kind_id).await {
            Ok(Some(record)) => record.name,
            Ok(None) => Self::fallback_kind_name(kind_id),
            Err(err) => {
                debug!("Kind record lookup failed for kind {}: {}", kind_id, err);
                Self::fallback_kind_name(kind_id)
            }
        }
    }

    fn fallback_kind_name(kind_id: i32) -> String {
        InstrumentKind::from_id(kind_id)
            .map(|kind| kind.display_name().to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// Percentages are recomputed once all values are known and left at zero
    /// for a zero-valued portfolio.
    fn apply_portfolio_percentages(instruments: &mut [InstrumentValuation], total_value: Decimal) {
        if total_value <= Decimal::ZERO {
            return;
        }
        for instrument in instruments.iter_mut() {
            instrument.percentage_of_portfolio = (instrument.value / total_value * dec!(100))
                .round_dp(PERCENTAGE_DECIMAL_PRECISION);
        }
    }

    /// Values one instrument, guarding the recursive fund descent against
    /// circular references.
    ///
    /// The guard keys on fund membership: only instruments that belong to a
    /// fund are tracked on the active resolution path. A revisit returns
    /// zero instead of recursing forever.
    fn calculate_investment_value<'a>(
        &'a self,
        investment: &'a Investment,
        investor_id: i32,
        reference_date: NaiveDate,
        visited: &'a mut HashSet<i32>,
    ) -> BoxFuture<'a, Result<Decimal>> {
        async move {
            if investment.fund_id.is_some() && visited.contains(&investment.id) {
                warn!(
                    "Circular fund reference detected for investment {}",
                    investment.id
                );
                self.events.emit(ValuationEvent::CycleDetected {
                    investment_id: investment.id,
                });
                return Ok(Decimal::ZERO);
            }

            if investment.fund_id.is_some() {
                visited.insert(investment.id);
            }

            self.calculate_value_by_kind(investment, investor_id, reference_date, visited)
                .await
        }
        .boxed()
    }

    async fn calculate_value_by_kind(
        &self,
        investment: &Investment,
        investor_id: i32,
        reference_date: NaiveDate,
        visited: &mut HashSet<i32>,
    ) -> Result<Decimal> {
        let Some(kind_id) = investment.kind_id else {
            warn!("Investment {} has no kind assigned", investment.id);
            self.events.emit(ValuationEvent::MissingKind {
                investment_id: investment.id,
            });
            return Ok(Decimal::ZERO);
        };

        match InstrumentKind::from_id(kind_id) {
            Some(InstrumentKind::Equity) => {
                self.calculate_equity_value(investment, reference_date).await
            }
            Some(InstrumentKind::RealEstate) => {
                self.calculate_real_estate_value(investment, reference_date)
                    .await
            }
            Some(InstrumentKind::Fund) => {
                self.calculate_fund_value(investment, investor_id, reference_date, visited)
                    .await
            }
            None => {
                warn!(
                    "Unknown kind id {} on investment {}",
                    kind_id, investment.id
                );
                self.events.emit(ValuationEvent::UnknownKind {
                    investment_id: investment.id,
                    kind_id,
                });
                Ok(Decimal::ZERO)
            }
        }
    }

    /// Equity value = share count as of the reference date x latest quoted
    /// price on or before it.
    async fn calculate_equity_value(
        &self,
        investment: &Investment,
        reference_date: NaiveDate,
    ) -> Result<Decimal> {
        let isin = match investment.isin.as_deref() {
            Some(isin) if !isin.is_empty() => isin,
            _ => {
                warn!("Equity investment {} has no ISIN", investment.id);
                self.events.emit(ValuationEvent::MissingIsin {
                    investment_id: investment.id,
                });
                return Ok(Decimal::ZERO);
            }
        };

        let share_count = self
            .sum_transaction_amounts(investment.id, TransactionKind::ShareCount, reference_date)
            .await?;
        if share_count <= Decimal::ZERO {
            // An empty or short position is valid data, not a quality defect.
            info!(
                "No shares held for equity {} as of {}",
                isin, reference_date
            );
            return Ok(Decimal::ZERO);
        }

        let price = match self
            .quote_repository
            .get_latest_quote_before_date(isin, reference_date)
            .await?
        {
            Some(quote) => quote.price_per_share,
            None => {
                warn!(
                    "No quote found for equity {} on or before {}",
                    isin, reference_date
                );
                self.events.emit(ValuationEvent::QuoteNotFound {
                    isin: isin.to_string(),
                    reference_date,
                });
                return Ok(Decimal::ZERO);
            }
        };
        if price <= Decimal::ZERO {
            warn!(
                "Non-positive quoted price {} for equity {} on or before {}",
                price, isin, reference_date
            );
            return Ok(Decimal::ZERO);
        }

        let value = share_count * price;
        debug!(
            "Equity {} value: {} shares x {} = {}",
            isin, share_count, price, value
        );
        Ok(value)
    }

    /// Real-estate value = latest land snapshot + latest building snapshot,
    /// each on or before the reference date.
    async fn calculate_real_estate_value(
        &self,
        investment: &Investment,
        reference_date: NaiveDate,
    ) -> Result<Decimal> {
        let land_value = self
            .latest_snapshot_value(investment.id, TransactionKind::LandValue, reference_date)
            .await?;
        let building_value = self
            .latest_snapshot_value(investment.id, TransactionKind::BuildingValue, reference_date)
            .await?;

        let total_value = land_value + building_value;
        debug!(
            "Real estate {} value: land {} + building {} = {}",
            investment.id, land_value, building_value, total_value
        );
        Ok(total_value)
    }

    /// The amount of the latest snapshot transaction of `kind`, or zero when
    /// the series is empty up to the reference date.
    async fn latest_snapshot_value(
        &self,
        investment_id: i32,
        kind: TransactionKind,
        reference_date: NaiveDate,
    ) -> Result<Decimal> {
        let transactions = self
            .transaction_repository
            .get_transactions_for_investment(investment_id, kind, reference_date)
            .await?;

        match Self::latest_transaction(&transactions) {
            Some(transaction) => Ok(transaction.amount),
            None => {
                warn!(
                    "No {:?} snapshot found for investment {}",
                    kind, investment_id
                );
                self.events.emit(ValuationEvent::SnapshotMissing {
                    investment_id,
                    kind,
                });
                Ok(Decimal::ZERO)
            }
        }
    }

    /// First transaction carrying the maximum date wins; ties keep the
    /// repository's return order.
    fn latest_transaction(transactions: &[Transaction]) -> Option<&Transaction> {
        let mut latest: Option<&Transaction> = None;
        for transaction in transactions {
            match latest {
                Some(current) if transaction.transaction_date > current.transaction_date => {
                    latest = Some(transaction);
                }
                None => latest = Some(transaction),
                _ => {}
            }
        }
        latest
    }

    /// Investor's receivable from a fund: ownership percentage (clamped at
    /// zero) applied to the fund's recursively summed total.
    async fn calculate_fund_value(
        &self,
        fund: &Investment,
        investor_id: i32,
        reference_date: NaiveDate,
        visited: &mut HashSet<i32>,
    ) -> Result<Decimal> {
        let percentage = self
            .calculate_fund_ownership_percentage(fund.id, reference_date)
            .await?;
        if percentage <= Decimal::ZERO {
            info!(
                "No ownership percentage in fund {} as of {}",
                fund.id, reference_date
            );
            return Ok(Decimal::ZERO);
        }

        let total_fund_value = self
            .calculate_total_fund_value(fund, investor_id, reference_date, visited)
            .await?;

        let investor_share = percentage / dec!(100) * total_fund_value;
        debug!(
            "Fund {} value: {}% of {} = {}",
            fund.id, percentage, total_fund_value, investor_share
        );
        Ok(investor_share)
    }

    /// Total fund value = sum of the valuations of all constituents,
    /// valuated recursively with the shared visited set.
    async fn calculate_total_fund_value(
        &self,
        fund: &Investment,
        investor_id: i32,
        reference_date: NaiveDate,
        visited: &mut HashSet<i32>,
    ) -> Result<Decimal> {
        let constituents = self
            .investment_repository
            .get_fund_investments(fund.id)
            .await?;
        if constituents.is_empty() {
            warn!("Fund {} has no constituent investments", fund.id);
            self.events.emit(ValuationEvent::FundWithoutConstituents {
                fund_id: fund.id,
            });
            return Ok(Decimal::ZERO);
        }

        let mut total_fund_value = Decimal::ZERO;
        for constituent in &constituents {
            total_fund_value += self
                .calculate_investment_value(constituent, investor_id, reference_date, visited)
                .await?;
        }
        Ok(total_fund_value)
    }

    /// Ownership percentage = sum of percentage deltas up to the reference
    /// date, never negative.
    async fn calculate_fund_ownership_percentage(
        &self,
        fund_id: i32,
        reference_date: NaiveDate,
    ) -> Result<Decimal> {
        let total_percentage = self
            .sum_transaction_amounts(fund_id, TransactionKind::OwnershipPercentage, reference_date)
            .await?;
        Ok(total_percentage.max(Decimal::ZERO))
    }

    /// Sum of signed amounts of one cumulative transaction kind up to and
    /// including `end_date`.
    async fn sum_transaction_amounts(
        &self,
        investment_id: i32,
        kind: TransactionKind,
        end_date: NaiveDate,
    ) -> Result<Decimal> {
        let transactions = self
            .transaction_repository
            .get_transactions_for_investment(investment_id, kind, end_date)
            .await?;
        Ok(transactions.iter().map(|t| t.amount).sum())
    }
}
