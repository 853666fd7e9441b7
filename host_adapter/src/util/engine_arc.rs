use std::{
    ops::Deref,
    ptr::NonNull,
    sync::atomic::{AtomicUsize, Ordering, fence},
};

/// The engine's reference counted base.
///
/// Every object the engine hands across the boundary carries one of these.
/// Bindings to a real engine implement it by forwarding to the engine's own
/// add_ref/release entry points.
///
/// # Safety
///
/// The object must stay alive for as long as at least one reference is held,
/// and `release` must only destroy it once the last reference is gone.
pub unsafe trait RefCounted {
    fn add_ref(&self);

    /// Give up one reference.
    ///
    /// # Safety
    ///
    /// `this` must point to a live object on which the caller owns a reference.
    /// The pointer must not be used again after this call.
    unsafe fn release(this: NonNull<Self>);

    fn has_one_ref(&self) -> bool;
}

/// A reference counted pointer to an engine object.
///
/// Cloning adds a reference on the engine side, dropping releases one.
#[repr(transparent)]
pub struct EngineArc<T: RefCounted> {
    ptr: NonNull<T>,
}

unsafe impl<T: RefCounted + Send + Sync> Send for EngineArc<T> {}
unsafe impl<T: RefCounted + Send + Sync> Sync for EngineArc<T> {}

impl<T: RefCounted> Drop for EngineArc<T> {
    fn drop(&mut self) {
        unsafe { T::release(self.ptr) }
    }
}

impl<T: RefCounted> Clone for EngineArc<T> {
    fn clone(&self) -> Self {
        self.inner().add_ref();
        Self { ptr: self.ptr }
    }
}

impl<T: RefCounted> EngineArc<T> {
    fn inner(&self) -> &T {
        unsafe { self.ptr.as_ref() }
    }

    /// Adopt a reference the engine has already counted for us.
    ///
    /// # Safety
    ///
    /// `ptr` must point to a live object and the caller must own one reference on it.
    pub unsafe fn from_raw(ptr: NonNull<T>) -> Self {
        Self { ptr }
    }

    /// Hand our reference back to the engine without releasing it.
    pub fn into_raw(self) -> NonNull<T> {
        std::mem::ManuallyDrop::new(self).ptr
    }

    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        this.ptr == other.ptr
    }

    pub fn has_one_ref(this: &Self) -> bool {
        this.inner().has_one_ref()
    }
}

/// A Rust-originating object prepared to be shared with the engine.
/// It carries the reference count next to the value.
pub struct Counted<T> {
    ref_count: AtomicUsize,
    value: T,
}

unsafe impl<T> RefCounted for Counted<T> {
    fn add_ref(&self) {
        self.ref_count.fetch_add(1, Ordering::Relaxed);
    }

    unsafe fn release(this: NonNull<Self>) {
        // the borrow of `this` ends before the allocation is reclaimed.
        if unsafe { this.as_ref() }
            .ref_count
            .fetch_sub(1, Ordering::Release)
            != 1
        {
            return;
        }

        fence(Ordering::Acquire);

        // this allocation was made by EngineArc::new, so it is a Box<Counted<T>>.
        drop(unsafe { Box::from_raw(this.as_ptr()) });
    }

    fn has_one_ref(&self) -> bool {
        self.ref_count.load(Ordering::Acquire) == 1
    }
}

impl<T> EngineArc<Counted<T>> {
    pub fn new(value: T) -> Self {
        let inner = Box::new(Counted {
            ref_count: AtomicUsize::new(1),
            value,
        });
        let ptr = NonNull::from(Box::leak(inner));

        Self { ptr }
    }

    pub fn ref_count(this: &Self) -> usize {
        this.inner().ref_count.load(Ordering::Acquire)
    }
}

// we can deref to the value if the object came from rust.
// engine-originating objects only expose their counted base.
impl<T> Deref for EngineArc<Counted<T>> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner().value
    }
}
