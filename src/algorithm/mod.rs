/// Local adaptive binarization with mean and min/max policies
pub mod classifier;
/// Strict local extremum detection with hypersphere marking
pub mod marker;
/// Scan lifecycle state and counters
pub mod scan;
/// Fixed global threshold
pub mod threshold;
