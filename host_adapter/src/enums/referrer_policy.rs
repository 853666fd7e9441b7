/// Policy for how the Referrer HTTP header value will be sent during
/// navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReferrerPolicy {
    /// Clear the referrer header if the header value is HTTPS but the request
    /// destination is HTTP.
    #[default]
    ClearReferrerOnTransitionFromSecureToInsecure,
    /// A slight variant on the default: if the request destination is HTTP,
    /// the HTTPS referrer is cleared.
    ReduceReferrerGranularityOnTransitionCrossOrigin,
    /// Strip the referrer down to an origin when the origin of the referrer is
    /// different from the destination's origin.
    OriginOnlyOnTransitionCrossOrigin,
    /// Never change the referrer.
    NeverClearReferrer,
    /// Strip the referrer down to the origin regardless of the redirect
    /// location.
    Origin,
    /// Clear the referrer when the request's referrer is cross-origin with
    /// the request's destination.
    ClearReferrerOnTransitionCrossOrigin,
    /// Strip the referrer down to the origin, but clear it entirely if the
    /// referrer value is HTTPS and the destination is HTTP.
    OriginClearOnTransitionFromSecureToInsecure,
    /// Always clear the referrer regardless of the request destination.
    NoReferrer,
}

impl ReferrerPolicy {
    /// The engine's default policy.
    pub const DEFAULT: Self = Self::ClearReferrerOnTransitionFromSecureToInsecure;
}
