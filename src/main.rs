use std::env;
use std::process;

use modscope::tracing_init::init_tracing;
use modscope::{plot, synthesize_bitstream, wav, Bitstream, ModulationScheme};

/// Playback rate for optional WAV export; the waveform's time axis is in
/// abstract symbol units, so this only sets how fast it plays.
const WAV_SAMPLE_RATE: u32 = 8000;

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <bits> <scheme> [chart.html] [output.wav]", args[0]);
        eprintln!("  <bits>    binary string, e.g. 101001");
        eprintln!("  <scheme>  one of ASK, FSK, PSK, PAM, QAM");
        process::exit(1);
    }

    let scheme: ModulationScheme = match args[2].parse() {
        Ok(scheme) => scheme,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    // same pre-filter the chart UI applies before handing text to the core
    let bitstream = Bitstream::sanitize(&args[1]);
    let dropped = args[1].chars().count() - bitstream.len();
    if dropped > 0 {
        eprintln!("Ignored {dropped} non-binary character(s) in input");
    }

    let waveform = synthesize_bitstream(&bitstream, scheme);

    println!("Scheme:  {scheme}");
    println!("Bits:    {}", bitstream.len());
    println!("Symbols: {}", bitstream.symbol_count(scheme.symbol_width()));
    println!("Samples: {}", waveform.len());

    let chart_path = args.get(3).map(String::as_str).unwrap_or("waveform.html");
    plot::write_html(&waveform, scheme, chart_path);
    println!("Chart:   {chart_path}");

    if let Some(wav_path) = args.get(4) {
        if let Err(e) = wav::write_wav_file(wav_path, &waveform, WAV_SAMPLE_RATE) {
            eprintln!("Failed to write '{wav_path}': {e}");
            process::exit(1);
        }
        println!("WAV:     {wav_path}");
    }
}
