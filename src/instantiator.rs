use alloc::vec::Vec;
use core::any::type_name;
use tracing::debug;

use crate::{
    any::Value,
    argument::Arguments,
    descriptor::Param,
    errors::InstantiateErrorKind,
    inject::FromArgument,
    service::{service_fn, BoxCloneService},
};

/// Function whose parameters are described by its argument types.
/// Implemented for closures taking up to 12 [`FromArgument`] arguments and returning `Result`.
pub trait Handler<Args>: Clone + Send + Sync + 'static {
    type Output: Send + Sync + 'static;
    type Error: Into<InstantiateErrorKind>;

    #[must_use]
    fn params() -> Vec<Param>;

    /// # Errors
    /// - Returns an error if the arguments can't be extracted or the function itself fails
    fn handle(&mut self, arguments: &Arguments) -> Result<Self::Output, InstantiateErrorKind>;
}

/// Method of `Recv`. Implemented for closures taking `&Recv` followed by up to 12 [`FromArgument`] arguments.
pub trait MethodHandler<Recv, Args>: Clone + Send + Sync + 'static {
    type Output: Send + Sync + 'static;
    type Error: Into<InstantiateErrorKind>;

    #[must_use]
    fn params() -> Vec<Param>;

    /// # Errors
    /// - Returns an error if the arguments can't be extracted or the method itself fails
    fn handle(&mut self, receiver: &Recv, arguments: &Arguments) -> Result<Self::Output, InstantiateErrorKind>;
}

macro_rules! impl_handler {
    (
        [$($ty:ident),*]
    ) => {
        #[allow(non_snake_case, unused_mut, unused_variables, unused_assignments)]
        impl<F, Response, Err, $($ty,)*> Handler<($($ty,)*)> for F
        where
            F: FnMut($($ty,)*) -> Result<Response, Err> + Clone + Send + Sync + 'static,
            Response: Send + Sync + 'static,
            Err: Into<InstantiateErrorKind>,
            $( $ty: FromArgument, )*
        {
            type Output = Response;
            type Error = Err;

            fn params() -> Vec<Param> {
                let mut params = Vec::new();
                $( params.push($ty::param(params.len())); )*
                params
            }

            fn handle(&mut self, arguments: &Arguments) -> Result<Self::Output, InstantiateErrorKind> {
                let mut index = 0;
                $(
                    let $ty = $ty::from_argument(arguments.value(index)?, index)?;
                    index += 1;
                )*
                self($($ty,)*).map_err(Into::into)
            }
        }

        #[allow(non_snake_case, unused_mut, unused_variables, unused_assignments)]
        impl<F, Recv, Response, Err, $($ty,)*> MethodHandler<Recv, ($($ty,)*)> for F
        where
            F: FnMut(&Recv, $($ty,)*) -> Result<Response, Err> + Clone + Send + Sync + 'static,
            Response: Send + Sync + 'static,
            Err: Into<InstantiateErrorKind>,
            $( $ty: FromArgument, )*
        {
            type Output = Response;
            type Error = Err;

            fn params() -> Vec<Param> {
                let mut params = Vec::new();
                $( params.push($ty::param(params.len())); )*
                params
            }

            fn handle(&mut self, receiver: &Recv, arguments: &Arguments) -> Result<Self::Output, InstantiateErrorKind> {
                let mut index = 0;
                $(
                    let $ty = $ty::from_argument(arguments.value(index)?, index)?;
                    index += 1;
                )*
                self(receiver, $($ty,)*).map_err(Into::into)
            }
        }
    };
}

all_the_tuples!(impl_handler);

pub(crate) type BoxedCloneInstantiator = BoxCloneService<Arguments, Value, InstantiateErrorKind>;
pub(crate) type BoxedCloneMethod = BoxCloneService<(Value, Arguments), Value, InstantiateErrorKind>;

#[must_use]
pub(crate) fn boxed_instantiator<H, Args>(mut handler: H) -> BoxedCloneInstantiator
where
    H: Handler<Args>,
    Args: 'static,
{
    BoxCloneService::new(service_fn(move |arguments: Arguments| {
        let provides = handler.handle(&arguments)?;

        debug!("Instantiated");

        Ok(Value::new(provides))
    }))
}

#[inline]
#[must_use]
pub(crate) fn boxed_instantiator_fn<F>(instantiator: F) -> BoxedCloneInstantiator
where
    F: FnMut(Arguments) -> Result<Value, InstantiateErrorKind> + Clone + Send + Sync + 'static,
{
    BoxCloneService::new(service_fn(instantiator))
}

#[must_use]
pub(crate) fn boxed_method<Recv, H, Args>(mut handler: H) -> BoxedCloneMethod
where
    Recv: Send + Sync + 'static,
    H: MethodHandler<Recv, Args>,
    Args: 'static,
{
    BoxCloneService::new(service_fn(move |(receiver, arguments): (Value, Arguments)| {
        let Some(this) = receiver.downcast_ref::<Recv>() else {
            return Err(InstantiateErrorKind::IncorrectType {
                expected: type_name::<Recv>(),
                actual: receiver.type_info().name,
            });
        };
        let output = handler.handle(this, &arguments)?;

        debug!("Invoked");

        Ok(Value::new(output))
    }))
}

#[inline]
#[must_use]
pub(crate) fn boxed_method_fn<F>(method: F) -> BoxedCloneMethod
where
    F: FnMut((Value, Arguments)) -> Result<Value, InstantiateErrorKind> + Clone + Send + Sync + 'static,
{
    BoxCloneService::new(service_fn(method))
}
