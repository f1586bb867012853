/// Base trait for thermodynamic property models.
///
/// Names the fluid type whose [`State`](crate::support::thermo::State) the
/// model operates on. Every capability trait builds on it.
pub trait ThermoModel {
    type Fluid;
}
