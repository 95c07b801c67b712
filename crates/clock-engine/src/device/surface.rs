use winit::dpi::PhysicalSize;

/// What the frame loop does after the surface refused a texture.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// The surface was reconfigured; the next frame should succeed.
    Reconfigured,
    /// Transient; drop this frame and try again on the next redraw.
    SkipFrame,
    /// The device is out of memory; stop the loop.
    Fatal,
}

pub fn classify_surface_error(err: &wgpu::SurfaceError) -> SurfaceErrorAction {
    use wgpu::SurfaceError as E;
    match err {
        E::Lost | E::Outdated => SurfaceErrorAction::Reconfigured,
        E::OutOfMemory => SurfaceErrorAction::Fatal,
        E::Timeout | E::Other => SurfaceErrorAction::SkipFrame,
    }
}

/// The window's swapchain and its current configuration.
///
/// A zero-area size (minimized window) suspends the surface: the size is
/// remembered but nothing is configured or acquired until it has area again.
pub(crate) struct WindowSurface<'w> {
    surface: wgpu::Surface<'w>,
    config: wgpu::SurfaceConfiguration,
    suspended: bool,
}

impl<'w> WindowSurface<'w> {
    pub(crate) fn new(
        surface: wgpu::Surface<'w>,
        config: wgpu::SurfaceConfiguration,
        device: &wgpu::Device,
    ) -> Self {
        surface.configure(device, &config);
        log::debug!(
            "surface configured: {}x{} {:?} {:?} {:?}",
            config.width,
            config.height,
            config.format,
            config.present_mode,
            config.alpha_mode
        );
        Self { surface, config, suspended: false }
    }

    #[inline]
    pub(crate) fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    #[inline]
    pub(crate) fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub(crate) fn resize(&mut self, device: &wgpu::Device, size: PhysicalSize<u32>) {
        self.suspended = !has_area(size);
        if self.suspended {
            log::debug!("surface suspended");
            return;
        }
        if (self.config.width, self.config.height) == (size.width, size.height) {
            return;
        }
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(device, &self.config);
    }

    /// Next swapchain texture. Lost/outdated surfaces are reconfigured before
    /// the error is returned.
    pub(crate) fn acquire(
        &mut self,
        device: &wgpu::Device,
    ) -> Result<wgpu::SurfaceTexture, SurfaceErrorAction> {
        let err = match self.surface.get_current_texture() {
            Ok(texture) => return Ok(texture),
            Err(err) => err,
        };

        let action = classify_surface_error(&err);
        match action {
            SurfaceErrorAction::Reconfigured => {
                if !self.suspended {
                    self.surface.configure(device, &self.config);
                }
                log::warn!("surface {err}; reconfigured");
            }
            SurfaceErrorAction::SkipFrame => log::warn!("surface {err}; frame skipped"),
            SurfaceErrorAction::Fatal => log::error!("surface {err}"),
        }
        Err(action)
    }
}

#[inline]
fn has_area(size: PhysicalSize<u32>) -> bool {
    size.width > 0 && size.height > 0
}

/// First sRGB format when `prefer_srgb`, else the surface's preferred one.
pub(crate) fn pick_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let srgb = formats.iter().copied().find(|f| f.is_srgb());
    match (prefer_srgb, srgb) {
        (true, Some(f)) => Some(f),
        _ => formats.first().copied(),
    }
}

/// The clock paints every pixel, so an opaque surface is preferred.
pub(crate) fn pick_alpha_mode(modes: &[wgpu::CompositeAlphaMode]) -> wgpu::CompositeAlphaMode {
    if modes.contains(&wgpu::CompositeAlphaMode::Opaque) {
        wgpu::CompositeAlphaMode::Opaque
    } else {
        modes.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode, SurfaceError, TextureFormat};

    // ── error classification ──────────────────────────────────────────────

    #[test]
    fn lost_and_outdated_reconfigure() {
        assert_eq!(classify_surface_error(&SurfaceError::Lost), SurfaceErrorAction::Reconfigured);
        assert_eq!(classify_surface_error(&SurfaceError::Outdated), SurfaceErrorAction::Reconfigured);
    }

    #[test]
    fn timeout_skips_and_oom_is_fatal() {
        assert_eq!(classify_surface_error(&SurfaceError::Timeout), SurfaceErrorAction::SkipFrame);
        assert_eq!(classify_surface_error(&SurfaceError::Other), SurfaceErrorAction::SkipFrame);
        assert_eq!(classify_surface_error(&SurfaceError::OutOfMemory), SurfaceErrorAction::Fatal);
    }

    // ── format / alpha selection ──────────────────────────────────────────

    #[test]
    fn srgb_is_preferred_when_offered() {
        let formats = [TextureFormat::Bgra8Unorm, TextureFormat::Rgba8UnormSrgb];
        assert_eq!(pick_format(&formats, true), Some(TextureFormat::Rgba8UnormSrgb));
        assert_eq!(pick_format(&formats, false), Some(TextureFormat::Bgra8Unorm));
    }

    #[test]
    fn linear_only_surface_falls_back_to_first() {
        let formats = [TextureFormat::Rgba8Unorm, TextureFormat::Bgra8Unorm];
        assert_eq!(pick_format(&formats, true), Some(TextureFormat::Rgba8Unorm));
        assert_eq!(pick_format(&[], true), None);
    }

    #[test]
    fn opaque_alpha_wins() {
        let modes = [CompositeAlphaMode::PreMultiplied, CompositeAlphaMode::Opaque];
        assert_eq!(pick_alpha_mode(&modes), CompositeAlphaMode::Opaque);
        assert_eq!(
            pick_alpha_mode(&[CompositeAlphaMode::PostMultiplied]),
            CompositeAlphaMode::PostMultiplied
        );
        assert_eq!(pick_alpha_mode(&[]), CompositeAlphaMode::Auto);
    }

    #[test]
    fn zero_sized_dimensions_have_no_area() {
        assert!(!has_area(PhysicalSize::new(0, 600)));
        assert!(!has_area(PhysicalSize::new(800, 0)));
        assert!(has_area(PhysicalSize::new(1, 1)));
    }
}
