/// Suspend the current task for `ms` milliseconds.
pub async fn sleep(ms: u64) {
    if ms == 0 {
        return;
    }

    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
