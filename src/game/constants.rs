pub(super) const HUD_BAR_HEIGHT: i32 = 34;
pub(super) const HEAD_SHADE: f32 = 0.72;
