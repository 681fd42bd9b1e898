//! The environment a backdrop renders into.
//!
//! A [`RenderHost`] bundles what a page offers the backdrop: a container
//! element, a render context factory, a frame scheduler and window resize
//! notifications. Every acquire has a matching release so a host can prove
//! that nothing outlives the backdrop that asked for it.

use super::config::Blending;
use super::scene::{Scene, Viewport};

/// Identifies a render context (and its output surface) owned by a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(pub u64);

/// Handle of a scheduled animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Handle of a registered window resize listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Host services used by [`super::Backdrop`].
///
/// # Implementations
///
/// - [`crate::infrastructure::render::HeadlessHost`] - In-memory host with resource accounting
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait RenderHost {
    /// Whether the container element exists yet.
    fn container_attached(&self) -> bool;

    /// Current size of the visible area.
    fn viewport(&self) -> Viewport;

    /// Creates a transparent render context sized to `viewport`.
    fn create_context(&mut self, viewport: Viewport, blending: Blending) -> ContextId;

    /// Appends the context's output surface to the container.
    fn attach_surface(&mut self, context: ContextId);

    /// Removes the context's output surface from the container.
    fn detach_surface(&mut self, context: ContextId);

    fn resize_context(&mut self, context: ContextId, viewport: Viewport);

    /// Draws one frame of `scene`.
    fn render(&mut self, context: ContextId, scene: &Scene);

    /// Releases every resource held by the context.
    fn dispose_context(&mut self, context: ContextId);

    fn request_frame(&mut self) -> FrameHandle;

    fn cancel_frame(&mut self, handle: FrameHandle);

    fn add_resize_listener(&mut self) -> ListenerId;

    fn remove_resize_listener(&mut self, listener: ListenerId);
}

impl<H: RenderHost + ?Sized> RenderHost for &mut H {
    fn container_attached(&self) -> bool {
        (**self).container_attached()
    }

    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }

    fn create_context(&mut self, viewport: Viewport, blending: Blending) -> ContextId {
        (**self).create_context(viewport, blending)
    }

    fn attach_surface(&mut self, context: ContextId) {
        (**self).attach_surface(context)
    }

    fn detach_surface(&mut self, context: ContextId) {
        (**self).detach_surface(context)
    }

    fn resize_context(&mut self, context: ContextId, viewport: Viewport) {
        (**self).resize_context(context, viewport)
    }

    fn render(&mut self, context: ContextId, scene: &Scene) {
        (**self).render(context, scene)
    }

    fn dispose_context(&mut self, context: ContextId) {
        (**self).dispose_context(context)
    }

    fn request_frame(&mut self) -> FrameHandle {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        (**self).cancel_frame(handle)
    }

    fn add_resize_listener(&mut self) -> ListenerId {
        (**self).add_resize_listener()
    }

    fn remove_resize_listener(&mut self, listener: ListenerId) {
        (**self).remove_resize_listener(listener)
    }
}
