// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll, ready};

use tracing::{debug, warn};

/// The host's asynchronous refresh operation.
///
/// Any `FnMut() -> impl Future<Output = Result<(), E>>` closure whose future is
/// `'static` implements this trait.
pub trait RefreshAction {
    /// Failure reported by the refresh.
    type Error;
    /// The in-flight refresh.
    type Future: Future<Output = Result<(), Self::Error>> + 'static;

    /// Starts one refresh.
    fn refresh(&mut self) -> Self::Future;
}

impl<F, Fut, E> RefreshAction for F
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<(), E>> + 'static,
{
    type Error = E;
    type Future = Fut;

    fn refresh(&mut self) -> Fut {
        self()
    }
}

/// Marks a refresh as in flight until dropped.
#[derive(Debug)]
pub(crate) struct InFlight(Rc<Cell<bool>>);

impl InFlight {
    /// Claims `flag`, or returns `None` if a refresh already holds it.
    pub(crate) fn acquire(flag: &Rc<Cell<bool>>) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        Some(Self(Rc::clone(flag)))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// A refresh started by a [`PullToRefreshController`](crate::PullToRefreshController).
///
/// Drive it to completion on the UI event loop (for example with
/// `wasm_bindgen_futures::spawn_local`). The controller reports
/// `is_refreshing` until this future completes, with success or failure, or
/// is dropped. The action's result is returned unchanged for the host to log
/// or surface.
#[must_use = "the refresh stays in flight until this future completes or is dropped"]
pub struct PendingRefresh<F> {
    future: Pin<Box<F>>,
    in_flight: Option<InFlight>,
}

impl<F> PendingRefresh<F> {
    pub(crate) fn new(future: F, in_flight: InFlight) -> Self {
        Self {
            future: Box::pin(future),
            in_flight: Some(in_flight),
        }
    }

    /// Returns `true` until the refresh has settled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }
}

impl<F> fmt::Debug for PendingRefresh<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingRefresh")
            .field("in_flight", &self.in_flight.is_some())
            .finish_non_exhaustive()
    }
}

impl<F, E> Future for PendingRefresh<F>
where
    F: Future<Output = Result<(), E>>,
{
    type Output = Result<(), E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        let result = ready!(this.future.as_mut().poll(cx));
        this.in_flight = None;
        if result.is_ok() {
            debug!("refresh settled");
        } else {
            warn!("refresh action failed");
        }
        Poll::Ready(result)
    }
}
