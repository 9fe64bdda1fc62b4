// SPDX-License-Identifier: MIT OR Apache-2.0
//! Targets that actions mutate.
//!
//! Actions never own the object they animate. The host keeps it in an
//! `Rc<RefCell<_>>`; actions hold a [`Target`], a weak handle that is
//! checked every frame. A target dropped mid-run simply stops receiving
//! values; the action keeps reporting frame states normally.
//!
//! The property seams are small per-quantity traits
//! ([`PositionTarget`], [`AlphaTarget`], [`FrameTarget`],
//! [`TextureTarget`]). [`Sprite`] is the bundled reference
//! implementation of all four.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

/// 2D point in integer pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point2 {
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate
    pub y: i32,
}

impl Point2 {
    /// The origin
    pub const ZERO: Point2 = Point2 { x: 0, y: 0 };

    /// Create a point
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise saturating addition
    pub fn saturating_add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }

    /// Component-wise saturating negation
    pub fn saturating_neg(self) -> Point2 {
        Point2::new(self.x.saturating_neg(), self.y.saturating_neg())
    }
}

impl std::ops::Add for Point2 {
    type Output = Point2;

    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point2 {
    type Output = Point2;

    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Neg for Point2 {
    type Output = Point2;

    fn neg(self) -> Point2 {
        Point2::new(-self.x, -self.y)
    }
}

/// Handle to a texture resource owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextureId(pub u32);

impl TextureId {
    /// Create a texture handle
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Something with an animatable 2D position
pub trait PositionTarget {
    /// Current position
    fn position(&self) -> Point2;
    /// Move to `position`
    fn set_position(&mut self, position: Point2);
}

/// Something with an animatable opacity
pub trait AlphaTarget {
    /// Current alpha, 0 (transparent) to 255 (opaque)
    fn alpha(&self) -> u8;
    /// Set the alpha
    fn set_alpha(&mut self, alpha: u8);
}

/// Something showing one frame of a fixed-size sheet at a time
pub trait FrameTarget {
    /// Number of frames in the sheet; at least 1
    fn frame_count(&self) -> usize;
    /// Index of the frame currently shown
    fn frame_index(&self) -> usize;
    /// Show the frame at `index`
    fn set_frame_index(&mut self, index: usize);
}

/// Something with a swappable bound texture
pub trait TextureTarget {
    /// Currently bound texture
    fn texture(&self) -> TextureId;
    /// Bind `texture`
    fn set_texture(&mut self, texture: TextureId);
}

/// Weak, release-aware handle to an externally owned target
///
/// [`upgrade`](Target::upgrade) yields the target only while the host
/// still owns it and [`release`](Target::release) has not been called
pub struct Target<T: ?Sized> {
    inner: Option<Weak<RefCell<T>>>,
}

impl<T: ?Sized> Target<T> {
    /// Create a handle to `shared`
    ///
    /// Takes the `Rc` by value so callers can coerce a concrete target
    /// to a trait object in the same expression; the allocation stays
    /// alive through the caller's own `Rc`
    pub fn new(shared: Rc<RefCell<T>>) -> Self {
        Self {
            inner: Some(Rc::downgrade(&shared)),
        }
    }

    /// Borrowable access to the target, if it is still alive
    pub fn upgrade(&self) -> Option<Rc<RefCell<T>>> {
        self.inner.as_ref()?.upgrade()
    }

    /// Drop the handle. Idempotent
    pub fn release(&mut self) {
        self.inner = None;
    }

    /// Check if [`release`](Target::release) has been called
    pub fn is_released(&self) -> bool {
        self.inner.is_none()
    }
}

impl<T: ?Sized> Clone for Target<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Target<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            None => f.write_str("Target(released)"),
            Some(weak) if weak.strong_count() == 0 => f.write_str("Target(dangling)"),
            Some(_) => f.write_str("Target(live)"),
        }
    }
}

/// Reference target: a plain sprite property bag
///
/// Hosts with their own drawable types implement the target traits
/// directly; `Sprite` exists so choreographies can be built and tested
/// without a renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    /// Position in pixels
    pub position: Point2,
    /// Opacity, 0-255
    pub alpha: u8,
    /// Frame of the sheet currently shown
    pub frame_index: usize,
    /// Total frames in the sheet; at least 1
    pub frame_count: usize,
    /// Bound texture
    pub texture: TextureId,
}

impl Sprite {
    /// Create an opaque single-frame sprite at the origin
    pub fn new() -> Self {
        Self {
            position: Point2::ZERO,
            alpha: 255,
            frame_index: 0,
            frame_count: 1,
            texture: TextureId(0),
        }
    }

    /// Set the starting position
    pub fn with_position(mut self, position: Point2) -> Self {
        self.position = position;
        self
    }

    /// Set the starting alpha
    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the sheet size; `frame_count` must be at least 1
    pub fn with_frame_count(mut self, frame_count: usize) -> Self {
        self.frame_count = frame_count;
        self
    }

    /// Set the bound texture
    pub fn with_texture(mut self, texture: TextureId) -> Self {
        self.texture = texture;
        self
    }

    /// Wrap in the shared form actions target
    pub fn into_shared(self) -> Rc<RefCell<Sprite>> {
        Rc::new(RefCell::new(self))
    }
}

impl Default for Sprite {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionTarget for Sprite {
    fn position(&self) -> Point2 {
        self.position
    }

    fn set_position(&mut self, position: Point2) {
        self.position = position;
    }
}

impl AlphaTarget for Sprite {
    fn alpha(&self) -> u8 {
        self.alpha
    }

    fn set_alpha(&mut self, alpha: u8) {
        self.alpha = alpha;
    }
}

impl FrameTarget for Sprite {
    fn frame_count(&self) -> usize {
        self.frame_count
    }

    fn frame_index(&self) -> usize {
        self.frame_index
    }

    fn set_frame_index(&mut self, index: usize) {
        self.frame_index = index;
    }
}

impl TextureTarget for Sprite {
    fn texture(&self) -> TextureId {
        self.texture
    }

    fn set_texture(&mut self, texture: TextureId) {
        self.texture = texture;
    }
}
