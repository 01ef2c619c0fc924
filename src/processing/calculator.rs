//! Calculator seam used by the one-shot command.

use crate::error::SubnetError;
use crate::models::Network;

/// Computes networks and splits them into subnets.
pub trait Calculator {
    /// Parse `cidr` and derive all network properties.
    fn calculate(&self, cidr: &str) -> Result<Network, SubnetError>;

    /// Populate `network.subnets` with subnets of prefix `target_bits`.
    fn split(&self, network: &mut Network, target_bits: u8) -> Result<(), SubnetError>;
}

/// Calculator backed directly by [`Network`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultCalculator;

impl DefaultCalculator {
    pub fn new() -> DefaultCalculator {
        DefaultCalculator
    }
}

impl Calculator for DefaultCalculator {
    fn calculate(&self, cidr: &str) -> Result<Network, SubnetError> {
        Network::new(cidr)
    }

    fn split(&self, network: &mut Network, target_bits: u8) -> Result<(), SubnetError> {
        network.split(target_bits)
    }
}
