mod session_mediator;

pub use session_mediator::SessionMediator;

#[cfg(test)]
mod tests;
