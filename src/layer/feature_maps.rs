use log::warn;

use crate::{
    color::Color,
    draw::{Collection, Label, LabelLocation, Primitive},
    error::StrataError,
    geometry::{Corners, Point, Size},
    layer::{DisplayLimit, Layer, channel_dark, channel_light, ensure_positive, placeholder_fill},
};

/// A stack of 2D feature maps, drawn as diagonally offset rectangles with
/// alternating fills.
///
/// Large channel counts can be limited for display: a handful of maps is
/// drawn at each end with placeholder dots marking the elided middle.
#[derive(Debug, Clone)]
pub struct FeatureMaps {
    channels: usize,
    width: f32,
    height: f32,
    spacing: f32,
    limited: usize,
    ends: usize,
    skip: usize,
    placeholder_radius: f32,
    dark: Color,
    light: Color,
    x: f32,
    y: f32,
    label: Option<Label>,
}

impl FeatureMaps {
    /// Creates a stack of `channels` maps, each `width` x `height`,
    /// vertically centered about the baseline until positioned.
    pub fn new(channels: usize, width: f32, height: f32) -> Result<Self, StrataError> {
        if channels == 0 {
            return Err(StrataError::InvalidGeometry(
                "feature map stack needs at least one channel".to_string(),
            ));
        }
        ensure_positive(width, "feature map width")?;
        ensure_positive(height, "feature map height")?;

        let mut maps = Self {
            channels,
            width,
            height,
            spacing: 10.0,
            limited: 0,
            ends: 3,
            skip: 3,
            placeholder_radius: 5.0,
            dark: channel_dark(),
            light: channel_light(),
            x: 0.0,
            y: 0.0,
            label: None,
        };
        maps.y = maps.extent().height() / 2.0 - maps.height;
        Ok(maps)
    }

    /// Sets the diagonal offset between consecutive maps (builder style).
    ///
    /// Re-centers the stack about the baseline, since the offset changes the
    /// total extent.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing.max(0.0);
        self.y = self.extent().height() / 2.0 - self.height;
        self
    }

    /// Limits the drawn maps to `shown` slots with `ends` full maps at each
    /// end (builder style). A limit at or above the channel count disables
    /// limiting.
    pub fn with_limited(mut self, shown: usize, ends: usize) -> Self {
        if shown >= self.channels {
            warn!(
                shown = shown,
                channels = self.channels;
                "Display limit must be below the channel count, ignoring",
            );
            return self;
        }
        self.limited = shown;
        self.ends = ends;
        self.y = self.extent().height() / 2.0 - self.height;
        self
    }

    /// Sets the interval between placeholder dots in the elided middle
    /// (builder style).
    pub fn with_skip_interval(mut self, skip: usize) -> Self {
        self.skip = skip.max(1);
        self
    }

    /// Sets the placeholder dot radius (builder style).
    pub fn with_placeholder_radius(mut self, radius: f32) -> Self {
        self.placeholder_radius = radius.max(0.0);
        self
    }

    /// Sets the alternating fill colors (builder style).
    pub fn with_colors(mut self, dark: Color, light: Color) -> Self {
        self.dark = dark;
        self.light = light;
        self
    }

    /// Sets the label, composed with the stack's statistics (builder style).
    pub fn with_label(mut self, name: impl Into<String>) -> Self {
        let word = if self.channels > 1 {
            "Channels"
        } else {
            "Channel"
        };
        self.label = Some(Label::new(format!(
            "{}\n{} {}\n{}x{}",
            name.into(),
            self.channels,
            word,
            self.width,
            self.height
        )));
        self
    }

    /// Sets which side the label is placed on (builder style).
    pub fn with_label_location(mut self, location: LabelLocation) -> Self {
        if let Some(label) = self.label.take() {
            self.label = Some(label.with_location(location));
        }
        self
    }

    /// Places the stack explicitly (builder style).
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Number of diagonal steps the drawn stack spans.
    fn steps(&self) -> usize {
        let drawn = if self.limited > 0 {
            self.limited
        } else {
            self.channels
        };
        drawn - 1
    }

    fn limit(&self) -> Option<DisplayLimit> {
        (self.limited > 0).then(|| {
            DisplayLimit::new(self.limited, self.ends, self.skip, self.placeholder_radius)
        })
    }

    fn map_origin(&self, slot: usize) -> Point {
        Point::new(
            self.x + self.spacing * slot as f32,
            self.y - self.spacing * slot as f32,
        )
    }
}

impl Layer for FeatureMaps {
    fn corners(&self) -> Corners {
        let extent = self.extent();
        let top = self.y + self.height;
        Corners::new(
            Point::new(self.x, top),
            Point::new(self.x + self.width, top),
            Point::new(self.x + extent.width() - self.width, top - extent.height()),
            Point::new(self.x + extent.width(), top - extent.height()),
        )
    }

    fn extent(&self) -> Size {
        let offset = self.steps() as f32 * self.spacing;
        Size::new(self.width + offset, self.height + offset)
    }

    fn base_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn set_position(&mut self, position: Point) {
        self.x = position.x();
        self.y = position.y();
    }

    fn collect(&self) -> Collection {
        let mut collection = Collection::new();
        let size = Size::new(self.width, self.height);
        let mut toggle = false;

        let push_map = |collection: &mut Collection, slot: usize, toggle: &mut bool| {
            let fill = if *toggle { self.dark } else { self.light };
            collection.push_filled(
                Primitive::Rect {
                    origin: self.map_origin(slot),
                    size,
                },
                fill,
            );
            *toggle = !*toggle;
        };

        match self.limit() {
            Some(limit) => {
                for i in 0..limit.ends {
                    push_map(&mut collection, i, &mut toggle);
                }

                for i in 0..limit.interior() {
                    if i % limit.skip == 0 {
                        let origin = self.map_origin(i + limit.ends);
                        collection.push_filled(
                            Primitive::Circle {
                                center: Point::new(
                                    origin.x() + self.width / 2.0,
                                    origin.y() + self.height / 2.0,
                                ),
                                radius: limit.placeholder_radius,
                            },
                            placeholder_fill(),
                        );
                    }
                }

                let offset = limit.ends + limit.interior();
                for i in 0..limit.ends {
                    push_map(&mut collection, i + offset, &mut toggle);
                }
            }
            None => {
                for i in 0..self.channels {
                    push_map(&mut collection, i, &mut toggle);
                }
            }
        }

        collection
    }

    fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_maps_rejects_empty_stack() {
        assert!(FeatureMaps::new(0, 100.0, 100.0).is_err());
        assert!(FeatureMaps::new(3, 0.0, 100.0).is_err());
    }

    #[test]
    fn test_feature_maps_extent_includes_stacking() {
        let maps = FeatureMaps::new(4, 100.0, 100.0).unwrap();
        // 3 diagonal steps of the default 10.0 spacing
        assert_eq!(maps.extent(), Size::new(130.0, 130.0));
    }

    #[test]
    fn test_feature_maps_auto_centering() {
        let maps = FeatureMaps::new(4, 100.0, 100.0).unwrap();
        // Extent 130 centered about 0: base bottom at 65 - 100
        assert_eq!(maps.position().y(), -35.0);

        let bounds = maps.bounds();
        assert_eq!(bounds.max_y(), 65.0);
        assert_eq!(bounds.min_y(), -65.0);
    }

    #[test]
    fn test_feature_maps_corners_follow_stack() {
        let maps = FeatureMaps::new(3, 100.0, 100.0)
            .unwrap()
            .with_spacing(10.0)
            .at(0.0, 0.0);
        let corners = maps.corners();
        assert_eq!(corners.top_left(), Point::new(0.0, 100.0));
        assert_eq!(corners.top_right(), Point::new(100.0, 100.0));
        assert_eq!(corners.bottom_left(), Point::new(20.0, -20.0));
        assert_eq!(corners.bottom_right(), Point::new(120.0, -20.0));
    }

    #[test]
    fn test_feature_maps_draws_one_rect_per_channel() {
        let maps = FeatureMaps::new(5, 40.0, 40.0).unwrap();
        assert_eq!(maps.collect().len(), 5);
    }

    #[test]
    fn test_feature_maps_limited_display() {
        let maps = FeatureMaps::new(64, 40.0, 40.0)
            .unwrap()
            .with_limited(12, 3)
            .with_skip_interval(3);
        // 6 end rects + placeholders at interior slots 0 and 3 of 6
        let rects = maps
            .collect()
            .items()
            .filter(|(p, _)| matches!(p, Primitive::Rect { .. }))
            .count();
        let dots = maps
            .collect()
            .items()
            .filter(|(p, _)| matches!(p, Primitive::Circle { .. }))
            .count();
        assert_eq!(rects, 6);
        assert_eq!(dots, 2);
    }

    #[test]
    fn test_feature_maps_limit_must_be_below_channels() {
        let maps = FeatureMaps::new(4, 40.0, 40.0).unwrap().with_limited(9, 2);
        // Ignored: draws all four channels
        assert_eq!(maps.collect().len(), 4);
    }

    #[test]
    fn test_feature_maps_label_composition() {
        let maps = FeatureMaps::new(3, 100.0, 80.0).unwrap().with_label("Input");
        assert_eq!(maps.label().unwrap().text(), "Input\n3 Channels\n100x80");

        let single = FeatureMaps::new(1, 10.0, 10.0).unwrap().with_label("Gray");
        assert_eq!(single.label().unwrap().text(), "Gray\n1 Channel\n10x10");
    }
}
