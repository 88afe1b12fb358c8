use anchor_lang::prelude::*;

#[error_code]
pub enum OracleError {
    #[msg("Pair account is not a usable price-integral source")]
    InvalidSource,
    #[msg("Window size must be positive and within the configured bound")]
    InvalidWindowSize,
    #[msg("The configured window has not yet elapsed since the last accepted sample")]
    WindowNotElapsed,
    #[msg("Caller is not the oracle authority")]
    Unauthorized,
}

#[error_code]
pub enum PairObserverError {
    #[msg("Pair observer: invalid account owner")]
    InvalidOwner,
    #[msg("Pair observer: account too small")]
    TooSmall,
    #[msg("Pair observer: zero reserve, the pair has no spot price")]
    DivisionByZero,
    #[msg("Pair observer: conversion overflowed the 256-bit intermediate")]
    Overflow,
}
