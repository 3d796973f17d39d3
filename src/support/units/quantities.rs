use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N2, P1, P5, Z0},
};

/// Van der Waals attraction constant `a`, Pa·m⁶/mol² in SI.
pub type VanDerWaalsAttraction = Quantity<ISQ<P5, P1, N2, Z0, Z0, N2, Z0>, SI<f64>, f64>;
