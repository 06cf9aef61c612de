//! Order queue commands: the submission side of the marketplace.
//!
//! `submit` is what the dashboard's order form calls through to; `list` is
//! for operators checking fulfillment state.

use chrono::Utc;
use clap::Subcommand;

use leadmart_core::{AppConfig, LeadOrder, OrderStatus, TIMESTAMP_FORMAT};
use leadmart_store::{OrderQueue, StoreError};

#[derive(Debug, Subcommand)]
pub(crate) enum OrderCommands {
    /// Submit a new lead-sourcing order
    Submit {
        /// Niche/category to source, e.g. "Dentists"
        #[arg(long)]
        niche: String,

        /// City or location to source in
        #[arg(long)]
        city: String,

        /// Upper bound on leads to acquire for this order
        #[arg(long, default_value_t = 10)]
        max_count: u32,

        /// Requester identity recorded in the queue
        #[arg(long, default_value = "cli")]
        requested_by: String,
    },
    /// List every order with its row number and status
    List,
}

pub(crate) fn handle(config: &AppConfig, command: OrderCommands) -> anyhow::Result<()> {
    let queue = OrderQueue::new(&config.orders_path);
    match command {
        OrderCommands::Submit {
            niche,
            city,
            max_count,
            requested_by,
        } => {
            if niche.trim().is_empty() {
                anyhow::bail!("--niche must be non-empty");
            }
            if city.trim().is_empty() {
                anyhow::bail!("--city must be non-empty");
            }
            if max_count == 0 {
                anyhow::bail!("--max-count must be at least 1");
            }

            let order = LeadOrder {
                submitted_at: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
                niche,
                location: city,
                max_count,
                requested_by,
                status: OrderStatus::PendingScrape,
            };
            queue.append(&order)?;
            println!(
                "order queued: {} in {} (up to {} leads)",
                order.niche, order.location, order.max_count
            );
            Ok(())
        }
        OrderCommands::List => {
            let orders = match queue.list_all() {
                Ok(orders) => orders,
                Err(StoreError::MissingInput { .. }) => Vec::new(),
                Err(e) => return Err(e.into()),
            };
            if orders.is_empty() {
                println!("no orders in queue");
                return Ok(());
            }
            for (idx, order) in orders.iter().enumerate() {
                println!(
                    "#{idx} [{}] {} in {} (max {}) by {} at {}",
                    order.status,
                    order.niche,
                    order.location,
                    order.max_count,
                    order.requested_by,
                    order.submitted_at
                );
            }
            Ok(())
        }
    }
}
