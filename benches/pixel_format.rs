use criterion::{Criterion, criterion_group, criterion_main};

use ezk_scanout::{
    ColorParams, FrameInfo, PixelFormat, RotationFlag, Surface, WritebackJob, convert_frame,
    packed_planes,
};
use std::hint::black_box;

const IMAGE_WIDTH: usize = 1920;
const IMAGE_HEIGHT: usize = 1080;

type ConvertFunction = fn(&Surface<'_>, &mut WritebackJob<'_>) -> usize;

fn blank(format: PixelFormat) -> Vec<u8> {
    vec![0x80u8; format.buffer_size(IMAGE_WIDTH, IMAGE_HEIGHT)]
}

fn do_convert(
    convert: ConvertFunction,
    src_format: PixelFormat,
    src: &[u8],
    dst_format: PixelFormat,
    dst: &mut [u8],
    rotated: bool,
) {
    let mut frame = FrameInfo::new(
        src_format,
        packed_planes(src_format, src, IMAGE_WIDTH, IMAGE_HEIGHT),
        IMAGE_WIDTH,
        IMAGE_HEIGHT,
    );

    if rotated {
        frame = frame.with_rotation(RotationFlag::Rotate180 | RotationFlag::ReflectX);
    }

    let surface = Surface::new(frame, ColorParams::default()).unwrap();
    let mut job = WritebackJob::new(FrameInfo::new(
        dst_format,
        packed_planes(dst_format, dst, IMAGE_WIDTH, IMAGE_HEIGHT),
        IMAGE_WIDTH,
        IMAGE_HEIGHT,
    ))
    .unwrap();

    black_box(convert(black_box(&surface), &mut job));
}

fn run_benchmarks(c: &mut Criterion, convert: ConvertFunction, s: &str) {
    use PixelFormat::*;

    let pairs = [
        (ARGB8888, XRGB8888),
        (XRGB8888, NV12),
        (NV12, ARGB8888),
        (YUV420, ARGB8888),
        (NV16, XRGB16161616),
        (ARGB16161616, RGB565),
    ];

    for (src_format, dst_format) in pairs {
        let src = blank(src_format);
        let mut dst = blank(dst_format);

        c.bench_function(&format!("{src_format:?} to {dst_format:?} {s}"), |b| {
            b.iter(|| do_convert(convert, src_format, &src, dst_format, &mut dst, false))
        });
    }

    let src = blank(ARGB8888);
    let mut dst = blank(ARGB8888);

    c.bench_function(&format!("ARGB8888 to ARGB8888 reflected {s}"), |b| {
        b.iter(|| do_convert(convert, ARGB8888, &src, ARGB8888, &mut dst, true))
    });
}

fn single_thread(c: &mut Criterion) {
    run_benchmarks(c, convert_frame, "single-threaded");
}

#[cfg(feature = "multi-thread")]
fn multi_thread(c: &mut Criterion) {
    run_benchmarks(c, ezk_scanout::convert_frame_multi_thread, "multi-threaded");
}

#[cfg(feature = "multi-thread")]
criterion_group!(benches, single_thread, multi_thread);

#[cfg(not(feature = "multi-thread"))]
criterion_group!(benches, single_thread);

criterion_main!(benches);
