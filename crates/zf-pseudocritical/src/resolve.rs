//! Override-then-derive resolution shared by both pseudo-critical methods.

use tracing::trace;
use zf_core::{ZfError, ZfResult, ensure_finite, fahrenheit_to_rankine};

use crate::args::{Arg, Operation};
use crate::inputs::GasInputs;
use crate::method::ConflictPolicy;
use crate::props::{Derivation, PseudoCriticalProps};

/// State for one public call: which operation the caller invoked, the
/// caller's original inputs, and every pseudo-critical quantity resolved so
/// far. Raw inputs (sg, T, P, mole fractions) are read but never recorded.
pub(crate) struct Resolution<'a> {
    origin: Operation,
    inputs: &'a GasInputs,
    policy: ConflictPolicy,
    props: PseudoCriticalProps,
}

impl<'a> Resolution<'a> {
    pub(crate) fn begin(
        origin: Operation,
        inputs: &'a GasInputs,
        policy: ConflictPolicy,
        method: &'static str,
        unsupported: &[Arg],
    ) -> ZfResult<Self> {
        if let Some(arg) = unsupported.iter().copied().find(|&a| inputs.is_supplied(a)) {
            return Err(ZfError::UnsupportedArgument {
                argument: arg.name(),
                context: format!("not accepted by pseudo-critical method \"{method}\""),
            });
        }
        inputs.validate()?;
        Ok(Self {
            origin,
            inputs,
            policy,
            props: PseudoCriticalProps::new(),
        })
    }

    pub(crate) fn origin(&self) -> Operation {
        self.origin
    }

    pub(crate) fn supplied(&self, arg: Arg) -> bool {
        self.inputs.is_supplied(arg)
    }

    pub(crate) fn supplied_any(&self, args: &[Arg]) -> bool {
        args.iter().any(|&a| self.supplied(a))
    }

    pub(crate) fn override_value(&self, arg: Arg) -> Option<f64> {
        self.inputs.get(arg)
    }

    /// Mole fraction, zero when absent.
    pub(crate) fn fraction(&self, arg: Arg) -> f64 {
        self.inputs.get(arg).unwrap_or(0.0)
    }

    pub(crate) fn require(&self, arg: Arg, alternatives: &'static str) -> ZfResult<f64> {
        self.inputs.get(arg).ok_or_else(|| ZfError::MissingArgument {
            operation: self.origin.name(),
            argument: arg.name(),
            description: arg.description(),
            alternatives,
        })
    }

    /// Gas temperature in °R.
    pub(crate) fn temperature_rankine(&self) -> ZfResult<f64> {
        let t = self.require(Arg::T, "'T'")?;
        Ok(fahrenheit_to_rankine(t))
    }

    /// Gas pressure in psia.
    pub(crate) fn pressure_psia(&self) -> ZfResult<f64> {
        let p = self.require(Arg::P, "'P'")?;
        Ok(self.inputs.pressure_basis.to_psia(p))
    }

    /// Fails if any of `derived_from` was supplied alongside an override of
    /// `quantity`, unless the caller prefers overrides.
    pub(crate) fn check_conflicts(&self, quantity: Arg, derived_from: &[Arg]) -> ZfResult<()> {
        if self.policy == ConflictPolicy::PreferOverrides {
            return Ok(());
        }
        match derived_from.iter().copied().find(|&a| self.supplied(a)) {
            Some(arg) => Err(ZfError::ConflictingArguments {
                operation: self.origin.name(),
                computed: quantity.name(),
                supplied: arg.name(),
            }),
            None => Ok(()),
        }
    }

    /// Resolves `quantity` from its override if one was supplied, otherwise
    /// through `derive`, and records the result.
    pub(crate) fn resolve<F>(&mut self, quantity: Arg, derived_from: &[Arg], derive: F) -> ZfResult<f64>
    where
        F: FnOnce(&mut Self) -> ZfResult<f64>,
    {
        if let Some(value) = self.props.get(quantity) {
            return Ok(value);
        }
        let value = match self.inputs.get(quantity) {
            Some(value) => {
                self.check_conflicts(quantity, derived_from)?;
                trace!(quantity = quantity.name(), value, "using override");
                value
            }
            None => {
                let value = ensure_finite(derive(self)?, quantity.name())?;
                trace!(quantity = quantity.name(), value, "derived");
                value
            }
        };
        self.props.insert(quantity, value);
        Ok(value)
    }

    /// Records an override taken without going through `resolve`.
    pub(crate) fn record(&mut self, quantity: Arg, value: f64) -> f64 {
        self.props.insert(quantity, value);
        value
    }

    pub(crate) fn finish(self, value: f64) -> Derivation {
        Derivation {
            value,
            props: self.props,
        }
    }

    pub(crate) fn into_props(self) -> PseudoCriticalProps {
        self.props
    }
}
