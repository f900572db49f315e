/// Formats every error in the chain, one per line
pub fn error_chain(err: &anyhow::Error) -> String {
    err.chain()
        .enumerate()
        .fold(String::new(), |mut a, (i, err)| {
            a.extend(format!("\n[{}] --> ", i).drain(..));
            a.extend(err.to_string().drain(..));
            a
        })
}

pub fn inspect_err<F, D>(err: &anyhow::Error, kind: F)
where
    F: Fn() -> D,
    D: std::fmt::Display,
{
    log::error!("got an error: {} because: {}", kind(), error_chain(err));
}
