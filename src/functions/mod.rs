//! The benchmark function catalogue.
//!
//! One module per function, each exporting the value evaluator, the analytic
//! gradient (allocating and in-place), and a `descriptor()` that bundles
//! them with their metadata. Registration happens in one place,
//! [`register_all`], so the catalogue's contents are visible at a glance.

use crate::error::Result;
use crate::registry::Registry;

pub mod ackley;
pub mod alpine_n1;
pub mod beale;
pub mod booth;
pub mod branin;
pub mod bukin_n6;
pub mod chung_reynolds;
pub mod colville;
pub mod dixons_price;
pub mod drop_wave;
pub mod easom;
pub mod eggholder;
pub mod exponential;
pub mod goldstein_price;
pub mod griewank;
pub mod hartman_3d;
pub mod hartman_6d;
pub mod himmelblau;
pub mod levy;
pub mod levy_n13;
pub mod matyas;
pub mod mccormick;
pub mod michalewicz;
pub mod powell;
pub mod qing;
pub mod rastrigin;
pub mod rosenbrock;
pub mod rotated_hyper_ellipsoid;
pub mod salomon;
pub mod schaffer_n2;
pub mod schwefel;
pub mod shekel;
pub mod six_hump_camel;
pub mod sphere;
pub mod styblinski_tang;
pub mod sum_squares;
pub mod three_hump_camel;
pub mod trid;
pub mod zakharov;

pub use ackley::*;
pub use alpine_n1::*;
pub use beale::*;
pub use booth::*;
pub use branin::*;
pub use bukin_n6::*;
pub use chung_reynolds::*;
pub use colville::*;
pub use dixons_price::*;
pub use drop_wave::*;
pub use easom::*;
pub use eggholder::*;
pub use exponential::*;
pub use goldstein_price::*;
pub use griewank::*;
pub use hartman_3d::*;
pub use hartman_6d::*;
pub use himmelblau::*;
pub use levy::*;
pub use levy_n13::*;
pub use matyas::*;
pub use mccormick::*;
pub use michalewicz::*;
pub use powell::*;
pub use qing::*;
pub use rastrigin::*;
pub use rosenbrock::*;
pub use rotated_hyper_ellipsoid::*;
pub use salomon::*;
pub use schaffer_n2::*;
pub use schwefel::*;
pub use shekel::*;
pub use six_hump_camel::*;
pub use sphere::*;
pub use styblinski_tang::*;
pub use sum_squares::*;
pub use three_hump_camel::*;
pub use trid::*;
pub use zakharov::*;

/// Registers every catalogue entry into `registry`, sorted alphabetically.
pub fn register_all(registry: &mut Registry) -> Result<()> {
    registry.register("ackley", ackley::descriptor()?)?;
    registry.register("alpine_n1", alpine_n1::descriptor()?)?;
    registry.register("beale", beale::descriptor()?)?;
    registry.register("booth", booth::descriptor()?)?;
    registry.register("branin", branin::descriptor()?)?;
    registry.register("bukin_n6", bukin_n6::descriptor()?)?;
    registry.register("chung_reynolds", chung_reynolds::descriptor()?)?;
    registry.register("colville", colville::descriptor()?)?;
    registry.register("dixons_price", dixons_price::descriptor()?)?;
    registry.register("drop_wave", drop_wave::descriptor()?)?;
    registry.register("easom", easom::descriptor()?)?;
    registry.register("eggholder", eggholder::descriptor()?)?;
    registry.register("exponential", exponential::descriptor()?)?;
    registry.register("goldstein_price", goldstein_price::descriptor()?)?;
    registry.register("griewank", griewank::descriptor()?)?;
    registry.register("hartman_3d", hartman_3d::descriptor()?)?;
    registry.register("hartman_6d", hartman_6d::descriptor()?)?;
    registry.register("himmelblau", himmelblau::descriptor()?)?;
    registry.register("levy", levy::descriptor()?)?;
    registry.register("levy_n13", levy_n13::descriptor()?)?;
    registry.register("matyas", matyas::descriptor()?)?;
    registry.register("mccormick", mccormick::descriptor()?)?;
    registry.register("michalewicz", michalewicz::descriptor()?)?;
    registry.register("powell", powell::descriptor()?)?;
    registry.register("qing", qing::descriptor()?)?;
    registry.register("rastrigin", rastrigin::descriptor()?)?;
    registry.register("rosenbrock", rosenbrock::descriptor()?)?;
    registry.register(
        "rotated_hyper_ellipsoid",
        rotated_hyper_ellipsoid::descriptor()?,
    )?;
    registry.register("salomon", salomon::descriptor()?)?;
    registry.register("schaffer_n2", schaffer_n2::descriptor()?)?;
    registry.register("schwefel", schwefel::descriptor()?)?;
    registry.register("shekel", shekel::descriptor()?)?;
    registry.register("six_hump_camel", six_hump_camel::descriptor()?)?;
    registry.register("sphere", sphere::descriptor()?)?;
    registry.register("styblinski_tang", styblinski_tang::descriptor()?)?;
    registry.register("sum_squares", sum_squares::descriptor()?)?;
    registry.register("three_hump_camel", three_hump_camel::descriptor()?)?;
    registry.register("trid", trid::descriptor()?)?;
    registry.register("zakharov", zakharov::descriptor()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_all_populates_registry() {
        let mut registry = Registry::new();
        register_all(&mut registry).unwrap();
        assert_eq!(registry.len(), 39);
        assert!(registry.get("sphere").is_some());
        assert!(registry.get("eggholder").is_some());
    }
}
