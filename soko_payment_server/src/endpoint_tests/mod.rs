mod callbacks;
mod mocks;
mod payments;
mod payouts;
