//! Simulation driver
//!
//! Owns the agent lifecycle around one shop monitor: spawns a thread per
//! barber and per customer, staggers arrivals, joins everybody, and closes
//! the shop cooperatively once the last customer has been settled. The
//! monitor itself never spawns or stops threads.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

use crate::events::EventSink;
use crate::shop::{ArrivalOutcome, Shop, ShopError, SummonOutcome};
use crate::simulation::error::{SimulationError, SimulationResult};
use crate::simulation::statistics::SimulationReport;
use crate::types::{BarberId, CustomerId, SimulationConfig};

/// How one customer visit ended.
enum VisitOutcome {
    Served { barber: BarberId },
    Rejected,
}

/// Drives one complete simulation run against a single shop instance.
#[derive(Debug)]
pub struct ShopSimulation {
    config: SimulationConfig,
    shop: Arc<Shop>,
}

impl ShopSimulation {
    /// Build a simulation whose shop logs transitions through `tracing`.
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        config.validate()?;
        let shop = Arc::new(Shop::new(config.shop_config())?);
        Ok(Self { config, shop })
    }

    /// Build a simulation whose shop reports transitions to a custom sink.
    pub fn with_sink(
        config: SimulationConfig,
        sink: Arc<dyn EventSink>,
    ) -> SimulationResult<Self> {
        config.validate()?;
        let shop = Arc::new(Shop::with_sink(config.shop_config(), sink)?);
        Ok(Self { config, shop })
    }

    /// The shop this simulation runs against.
    pub fn shop(&self) -> &Arc<Shop> {
        &self.shop
    }

    /// Run the simulation to completion and return the final report.
    ///
    /// Blocks the calling thread until every customer has been settled and
    /// every barber has gone home.
    #[instrument(skip(self), fields(barbers = self.config.barbers, customers = self.config.customers))]
    pub fn run(self) -> SimulationResult<SimulationReport> {
        let start = Instant::now();

        let base_seed = match self.config.seed {
            Some(seed) => {
                info!("Using deterministic seed: {}", seed);
                seed
            }
            None => {
                debug!("Using entropy-based random seed");
                StdRng::from_entropy().gen()
            }
        };

        let barbers = self.spawn_barbers(base_seed)?;
        let customers = self.spawn_customers(base_seed)?;

        // Settle every visit before telling the barbers to go home.
        let (served, rejected, mut per_barber) = self.join_customers(customers)?;
        self.shop.close();
        let barber_counts = Self::join_barbers(barbers)?;

        if per_barber != barber_counts {
            // Both sides count completed cycles; a mismatch means a customer
            // and a barber disagree about who finished what.
            warn!(?per_barber, ?barber_counts, "per-barber tallies disagree across agents");
            per_barber = barber_counts;
        }

        let dropped = self.shop.dropped_count();
        if dropped != rejected as u64 {
            warn!(dropped, rejected, "shop drop counter disagrees with customer outcomes");
        }

        let report = SimulationReport {
            customers_submitted: self.config.customers,
            customers_served: served,
            customers_rejected: rejected,
            per_barber_served: per_barber,
            wall_clock: start.elapsed(),
        };
        info!(
            served = report.customers_served,
            rejected = report.customers_rejected,
            "simulation complete"
        );
        Ok(report)
    }

    /// Spawn one service-loop thread per barber.
    fn spawn_barbers(
        &self,
        base_seed: u64,
    ) -> SimulationResult<Vec<thread::JoinHandle<Result<usize, ShopError>>>> {
        let (min_service, max_service) = self.config.service_ms();
        let mut handles = Vec::with_capacity(self.config.barbers);

        for index in 1..=self.config.barbers {
            let shop = Arc::clone(&self.shop);
            let id = BarberId::new(index as u32);
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(index as u64));

            let handle = thread::Builder::new()
                .name(format!("barber-{index}"))
                .spawn(move || -> Result<usize, ShopError> {
                    let mut completed = 0usize;
                    loop {
                        match shop.summon(id)? {
                            SummonOutcome::ShopClosed => break,
                            SummonOutcome::BeganService(_) => {
                                // The hair-cut itself happens outside the
                                // monitor lock.
                                let cut = rng.gen_range(min_service..=max_service);
                                thread::sleep(Duration::from_millis(cut));
                                shop.dismiss(id)?;
                                completed += 1;
                            }
                        }
                    }
                    Ok(completed)
                })?;
            handles.push(handle);
        }

        Ok(handles)
    }

    /// Spawn one visit thread per customer, staggered by the driver.
    fn spawn_customers(
        &self,
        base_seed: u64,
    ) -> SimulationResult<Vec<thread::JoinHandle<Result<VisitOutcome, ShopError>>>> {
        let (min_gap, max_gap) = self.config.arrival_gap_ms();
        let mut rng = StdRng::seed_from_u64(base_seed);
        let mut handles = Vec::with_capacity(self.config.customers);

        for index in 1..=self.config.customers {
            let gap = rng.gen_range(min_gap..=max_gap);
            if gap > 0 {
                thread::sleep(Duration::from_millis(gap));
            }

            let shop = Arc::clone(&self.shop);
            let id = CustomerId::new(index as u32);

            let handle = thread::Builder::new()
                .name(format!("customer-{index}"))
                .spawn(move || -> Result<VisitOutcome, ShopError> {
                    match shop.arrive(id)? {
                        ArrivalOutcome::Rejected => Ok(VisitOutcome::Rejected),
                        ArrivalOutcome::Seated(barber) => {
                            shop.depart(id, barber)?;
                            Ok(VisitOutcome::Served { barber })
                        }
                    }
                })?;
            handles.push(handle);
        }

        Ok(handles)
    }

    /// Join all customer threads, tallying outcomes.
    fn join_customers(
        &self,
        handles: Vec<thread::JoinHandle<Result<VisitOutcome, ShopError>>>,
    ) -> SimulationResult<(usize, usize, Vec<usize>)> {
        let mut served = 0usize;
        let mut rejected = 0usize;
        let mut per_barber = vec![0usize; self.config.barbers];

        for (index, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(Ok(VisitOutcome::Served { barber })) => {
                    served += 1;
                    per_barber[(barber.get() - 1) as usize] += 1;
                }
                Ok(Ok(VisitOutcome::Rejected)) => rejected += 1,
                Ok(Err(err)) => return Err(SimulationError::Shop(err)),
                Err(_) => {
                    return Err(SimulationError::agent_failure(
                        "customer",
                        format!("customer-{} panicked", index + 1),
                    ))
                }
            }
        }

        Ok((served, rejected, per_barber))
    }

    /// Join all barber threads, collecting per-barber hair-cut counts.
    fn join_barbers(
        handles: Vec<thread::JoinHandle<Result<usize, ShopError>>>,
    ) -> SimulationResult<Vec<usize>> {
        let mut counts = Vec::with_capacity(handles.len());

        for (index, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(Ok(completed)) => counts.push(completed),
                Ok(Err(err)) => return Err(SimulationError::Shop(err)),
                Err(_) => {
                    return Err(SimulationError::agent_failure(
                        "barber",
                        format!("barber-{} panicked", index + 1),
                    ))
                }
            }
        }

        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_config() -> SimulationConfig {
        SimulationConfig {
            barbers: 2,
            chairs: 3,
            customers: 6,
            min_service_ms: 1,
            max_service_ms: 3,
            min_arrival_gap_ms: 0,
            max_arrival_gap_ms: 1,
            seed: Some(7),
        }
    }

    #[test]
    fn test_invalid_config_is_refused() {
        let mut config = quick_config();
        config.customers = 0;
        assert!(matches!(
            ShopSimulation::new(config),
            Err(SimulationError::Configuration(_))
        ));
    }

    #[test]
    fn test_run_settles_every_visit() {
        let sim = ShopSimulation::new(quick_config()).unwrap();
        let report = sim.run().unwrap();

        assert_eq!(report.customers_submitted, 6);
        assert!(report.is_conserved());
        assert_eq!(report.per_barber_served.len(), 2);
        assert_eq!(
            report.per_barber_served.iter().sum::<usize>(),
            report.customers_served
        );
    }
}
