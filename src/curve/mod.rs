pub mod average;
pub mod interp;
pub mod step;
pub mod tp_at_k;
pub mod union;
