mod reconciler;

pub use reconciler::reconcile_stored_total;
