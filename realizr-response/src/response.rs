//! The `Response` trait every pipeline stage implements.
//!
//! A response is an immutable function of one variable: `s` (complex) for the
//! s-domain stage, `w` (real angular frequency) for every stage after it.
//! Evaluation never mutates the stage, so the same stage can be shared across
//! threads and sampled any number of times with identical results.
//!
//! Design goals
//! - Stages compose by value (`Magnitude<FrequencyDomain<TransferFunction>>`)
//!   or by reference (`Magnitude<FrequencyDomain<&TransferFunction>>`)
//! - Array evaluation is elementwise over `ndarray` views; with the `parallel`
//!   feature it runs on the rayon pool

use cfg_if::cfg_if;
use ndarray::{Array1, ArrayView1};

cfg_if! {
    if #[cfg(feature = "parallel")] {
        use ndarray::Zip;

        fn map_elems<In, Out, F>(xs: ArrayView1<'_, In>, f: F) -> Array1<Out>
        where
            In: Sync,
            Out: Send,
            F: Fn(&In) -> Out + Sync + Send,
        {
            Zip::from(xs).par_map_collect(f)
        }
    } else {
        fn map_elems<In, Out, F>(xs: ArrayView1<'_, In>, f: F) -> Array1<Out>
        where
            F: Fn(&In) -> Out,
        {
            xs.map(f)
        }
    }
}

/// A pure function of one variable.
pub trait Response<In>: Send + Sync {
    type Output: Copy + Send;

    /// Evaluate at a single point.
    fn eval(&self, x: In) -> Self::Output;

    /// Evaluate elementwise over an array of points.
    fn eval_many(&self, xs: ArrayView1<'_, In>) -> Array1<Self::Output>
    where
        In: Copy + Sync,
    {
        map_elems(xs, |&x| self.eval(x))
    }
}

impl<In, R> Response<In> for &R
where
    R: Response<In> + ?Sized,
{
    type Output = R::Output;

    #[inline]
    fn eval(&self, x: In) -> Self::Output {
        (**self).eval(x)
    }
}

/// Adapter turning a plain closure into a [`Response`].
#[derive(Copy, Clone, Debug)]
pub struct FnResponse<F>(F);

/// Wrap a closure, e.g. a hand-written `hs(s)`, so it can feed the pipeline.
#[inline]
pub fn from_fn<F>(f: F) -> FnResponse<F> {
    FnResponse(f)
}

impl<In, Out, F> Response<In> for FnResponse<F>
where
    F: Fn(In) -> Out + Send + Sync,
    Out: Copy + Send,
{
    type Output = Out;

    #[inline]
    fn eval(&self, x: In) -> Out {
        (self.0)(x)
    }
}
