//! PDF output engine
//!
//! Builds the document directly with lopdf: one page object per grid page,
//! one image XObject per photo, and a content stream that scales each
//! image into its rectangle.

use crate::constants::mm_to_pt;
use crate::layout::Rect;
use crate::options::GridOptions;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use super::{DecodedImage, ImageData, OutputEngine};

/// Content of the page currently being painted
#[derive(Default)]
struct PageContent {
    ops: String,
    xobjects: Dictionary,
}

/// Output engine writing a PDF document
pub struct PdfEngine {
    doc: Document,
    pages_id: ObjectId,
    page_width_pt: f32,
    page_height_pt: f32,
    page_refs: Vec<Object>,
    current: Option<PageContent>,
    image_count: usize,
    title: Option<String>,
}

impl PdfEngine {
    /// Create an engine for pages of the given size in millimeters
    pub fn new(page_width_mm: f32, page_height_mm: f32) -> Result<Self> {
        if !(page_width_mm > 0.0 && page_height_mm > 0.0) {
            return Err(GridError::EngineUnavailable(format!(
                "Cannot create {}x{} mm pages",
                page_width_mm, page_height_mm
            )));
        }

        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();

        Ok(Self {
            doc,
            pages_id,
            page_width_pt: mm_to_pt(page_width_mm),
            page_height_pt: mm_to_pt(page_height_mm),
            page_refs: Vec::new(),
            current: None,
            image_count: 0,
            title: None,
        })
    }

    /// Create an engine for the paper and title in `options`
    pub fn for_options(options: &GridOptions) -> Result<Self> {
        if !options.geometry().is_valid() {
            return Err(GridError::EngineUnavailable(
                "Page geometry leaves no room for photos".to_string(),
            ));
        }

        let (width, height) = options.paper.dimensions_mm();
        let mut engine = Self::new(width, height)?;
        engine.title = options.title.clone();
        Ok(engine)
    }

    /// Number of pages started so far
    pub fn page_count(&self) -> usize {
        self.page_refs.len() + usize::from(self.current.is_some())
    }

    fn flush_page(&mut self) {
        let Some(content) = self.current.take() else {
            return;
        };

        let content_id = self
            .doc
            .add_object(Stream::new(Dictionary::new(), content.ops.into_bytes()));

        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(content.xobjects));

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(self.pages_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(self.page_width_pt),
                Object::Real(self.page_height_pt),
            ]),
        );
        page_dict.set("Resources", Object::Dictionary(resources));
        page_dict.set("Contents", Object::Reference(content_id));

        let page_id = self.doc.add_object(page_dict);
        self.page_refs.push(Object::Reference(page_id));
    }

    fn add_image_xobject(&mut self, image: &DecodedImage) -> ObjectId {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::Name(b"XObject".to_vec()));
        dict.set("Subtype", Object::Name(b"Image".to_vec()));
        dict.set("Width", image.size.width as i64);
        dict.set("Height", image.size.height as i64);
        dict.set("BitsPerComponent", 8_i64);

        let stream = match &image.data {
            ImageData::Jpeg { data, color_space } => {
                dict.set(
                    "ColorSpace",
                    Object::Name(color_space.pdf_name().as_bytes().to_vec()),
                );
                dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));
                Stream::new(dict, data.bytes().to_vec()).with_compression(false)
            }
            ImageData::Rgb(samples) => {
                dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
                Stream::new(dict, samples.clone())
            }
        };

        self.doc.add_object(stream)
    }
}

impl OutputEngine for PdfEngine {
    type Output = Vec<u8>;

    fn begin_page(&mut self) -> Result<()> {
        self.flush_page();
        self.current = Some(PageContent::default());
        Ok(())
    }

    fn draw_image(&mut self, image: &DecodedImage, rect: &Rect) -> Result<()> {
        if self.current.is_none() {
            return Err(GridError::EngineUnavailable(
                "Image drawn before any page was started".to_string(),
            ));
        }

        let image_id = self.add_image_xobject(image);
        let name = format!("Im{}", self.image_count);
        self.image_count += 1;

        // PDF space has its origin at the bottom-left corner
        let width = mm_to_pt(rect.width);
        let height = mm_to_pt(rect.height);
        let x = mm_to_pt(rect.x);
        let y = self.page_height_pt - mm_to_pt(rect.bottom());

        if let Some(content) = self.current.as_mut() {
            content
                .xobjects
                .set(name.as_bytes(), Object::Reference(image_id));
            content.ops.push_str(&format!(
                "q {} 0 0 {} {} {} cm /{} Do Q\n",
                width, height, x, y, name
            ));
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<u8>> {
        self.flush_page();

        let count = self.page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(self.page_refs)),
            ("Count", Object::Integer(count)),
        ]);
        self.doc
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self.doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_id)),
        ]));
        self.doc.trailer.set("Root", catalog_id);

        if let Some(title) = &self.title {
            let info_id = self.doc.add_object(Dictionary::from_iter(vec![(
                "Title",
                Object::string_literal(title.as_str()),
            )]));
            self.doc.trailer.set("Info", info_id);
        }

        self.doc.compress();

        let mut bytes = Vec::new();
        self.doc.save_to(&mut bytes)?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photo::PixelSize;

    fn gray_pixel() -> DecodedImage {
        DecodedImage {
            size: PixelSize::new(1, 1),
            data: ImageData::Rgb(vec![128, 128, 128]),
        }
    }

    #[test]
    fn test_rejects_empty_page_size() {
        assert!(matches!(
            PdfEngine::new(0.0, 297.0),
            Err(GridError::EngineUnavailable(_))
        ));
    }

    #[test]
    fn test_draw_requires_page() {
        let mut engine = PdfEngine::new(210.0, 297.0).unwrap();
        let result = engine.draw_image(&gray_pixel(), &Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(matches!(result, Err(GridError::EngineUnavailable(_))));
    }

    #[test]
    fn test_writes_pages_and_images() {
        let mut engine = PdfEngine::new(210.0, 297.0).unwrap();
        engine.begin_page().unwrap();
        engine
            .draw_image(&gray_pixel(), &Rect::new(10.0, 10.0, 50.0, 50.0))
            .unwrap();
        engine.begin_page().unwrap();
        assert_eq!(engine.page_count(), 2);

        let bytes = engine.finish().unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 2);

        let first = doc.get_page_content(pages[&1]).unwrap();
        let content = String::from_utf8_lossy(&first);
        assert!(content.contains("/Im0 Do"));
    }

    #[test]
    fn test_rect_is_flipped_to_pdf_space() {
        let mut engine = PdfEngine::new(100.0, 200.0).unwrap();
        engine.begin_page().unwrap();
        // Top-left 10 x 10 mm square -> bottom edge 10 mm below the top
        engine
            .draw_image(&gray_pixel(), &Rect::new(0.0, 0.0, 10.0, 10.0))
            .unwrap();

        let ops = &engine.current.as_ref().unwrap().ops;
        let expected_y = mm_to_pt(200.0) - mm_to_pt(10.0);
        assert!(ops.starts_with(&format!(
            "q {} 0 0 {} 0 {} cm",
            mm_to_pt(10.0),
            mm_to_pt(10.0),
            expected_y
        )));
    }
}
