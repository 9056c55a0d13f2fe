use wgpu::util::DeviceExt;

use crate::render::{RenderCtx, RenderTarget};
use crate::sim::Grid;

use super::arena::CellArena;
use super::layout::{BoardLayout, CellVertex, QUAD_VERTEX_COUNT};
use super::style::{BoardStyle, StyleUniform};

/// GPU-resident geometry of one cell: a vertex buffer holding its six
/// vertices.
#[derive(Debug)]
pub struct CellHandle {
    vbo: wgpu::Buffer,
}

impl CellHandle {
    fn upload(device: &wgpu::Device, layout: &BoardLayout, x: usize, y: usize) -> Self {
        let quad = layout.quad(x, y);
        let vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("life cell vbo"),
            contents: bytemuck::cast_slice(&quad),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self { vbo }
    }
}

/// Pre-built per-cell quads and the pipeline that draws them.
///
/// Geometry is computed and uploaded once in [`BoardCache::build`]; each
/// frame only binds the buffers of live cells. Nothing is allocated per frame.
pub struct BoardCache {
    layout: BoardLayout,
    style: BoardStyle,

    pipeline_format: wgpu::TextureFormat,
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    #[allow(dead_code)]
    style_ubo: wgpu::Buffer,

    cells: CellArena<CellHandle>,
}

impl BoardCache {
    /// Compiles the cell pipeline and uploads one vertex buffer per cell.
    pub fn build(ctx: &RenderCtx<'_>, layout: BoardLayout, style: BoardStyle) -> Self {
        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("life cell bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: wgpu::BufferSize::new(
                                std::mem::size_of::<StyleUniform>() as u64,
                            ),
                        },
                        count: None,
                    }],
                });

        let pipeline = create_pipeline(ctx, &bind_group_layout);

        let style_ubo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("life style ubo"),
            contents: bytemuck::bytes_of(&StyleUniform::from(&style)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("life cell bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: style_ubo.as_entire_binding(),
            }],
        });

        let cells = CellArena::build(layout, |x, y| CellHandle::upload(ctx.device, &layout, x, y));

        let (xrows, yrows) = layout.dimensions();
        log::info!(
            "board cache built: {xrows}x{yrows} cells, {} vertex buffers, format {:?}",
            cells.len(),
            ctx.surface_format
        );

        Self {
            layout,
            style,
            pipeline_format: ctx.surface_format,
            pipeline,
            bind_group_layout,
            bind_group,
            style_ubo,
            cells,
        }
    }

    #[inline]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Issues one draw call for the two triangles of `handle`.
    #[inline]
    pub fn draw_cell(pass: &mut wgpu::RenderPass<'_>, handle: &CellHandle) {
        pass.set_vertex_buffer(0, handle.vbo.slice(..));
        pass.draw(0..QUAD_VERTEX_COUNT, 0..1);
    }

    /// Draws every live cell of `grid` in row-major order.
    ///
    /// Returns the number of cells drawn.
    pub fn draw_live_cells(&self, pass: &mut wgpu::RenderPass<'_>, grid: &Grid) -> usize {
        let mut drawn = 0;
        for handle in self.cells.live(grid) {
            Self::draw_cell(pass, handle);
            drawn += 1;
        }
        drawn
    }

    /// Clears the target and draws the live cells of `grid`.
    ///
    /// Presentation is left to the caller that owns the frame.
    pub fn render_frame(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        grid: &Grid,
    ) -> usize {
        self.ensure_pipeline(ctx);

        let mut rpass = target.begin_clear_pass("life board pass", self.style.background);

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        self.draw_live_cells(&mut rpass, grid)
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == ctx.surface_format {
            return;
        }

        log::debug!(
            "surface format changed {:?} -> {:?}; rebuilding cell pipeline",
            self.pipeline_format,
            ctx.surface_format
        );
        self.pipeline = create_pipeline(ctx, &self.bind_group_layout);
        self.pipeline_format = ctx.surface_format;
    }
}

fn create_pipeline(
    ctx: &RenderCtx<'_>,
    bind_group_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("life cell shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shaders/cell.wgsl").into()),
    });

    let pipeline_layout = ctx
        .device
        .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("life cell pipeline layout"),
            bind_group_layouts: &[bind_group_layout],
            immediate_size: 0,
        });

    ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("life cell pipeline"),
        layout: Some(&pipeline_layout),

        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[CellVertex::layout()],
        },

        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            // The two triangles of a quad wind in opposite directions.
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },

        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}
