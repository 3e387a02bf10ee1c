// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

//! The interactive menu. Reads choices line by line and prints the result of
//! each query. Input and output are generic so sessions can be scripted.

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::input::{parse_search_code, parse_threshold, SortDirection};
use crate::models::{CurrencyRecord, RateSheet};
use crate::queries;

const RULE: &str = "--------------------------";

pub struct Menu<'a, R, W> {
    sheet: &'a RateSheet,
    input: R,
    output: W,
    clear_screen: bool,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(sheet: &'a RateSheet, input: R, output: W) -> Self {
        Self {
            sheet,
            input,
            output,
            clear_screen: false,
        }
    }

    pub fn clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// Loop until the user picks "0" or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.draw_menu()?;

            let Some(choice) = self.read_line()? else {
                debug!("input closed, leaving menu");
                writeln!(self.output)?;
                writeln!(self.output, "Çıkış yapılıyor...")?;
                return self.output.flush();
            };

            debug!(choice = choice.as_str(), "menu choice");
            match choice.as_str() {
                "1" => self.list_all()?,
                "2" => self.search_by_code()?,
                "3" => self.list_above_threshold()?,
                "4" => self.sort_by_rate()?,
                "5" => self.show_statistics()?,
                "0" => {
                    writeln!(self.output, "Çıkış yapılıyor...")?;
                    return self.output.flush();
                }
                _ => writeln!(self.output, "Geçersiz seçim. Lütfen tekrar deneyin.")?,
            }

            writeln!(self.output)?;
            writeln!(self.output, "Devam etmek için ENTER'a basın...")?;
            self.output.flush()?;
            self.read_line()?;
        }
    }

    fn draw_menu(&mut self) -> io::Result<()> {
        if self.clear_screen {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        writeln!(self.output, "===== CurrencyTracker =====")?;
        writeln!(self.output, "1. Tüm dövizleri listele")?;
        writeln!(self.output, "2. Koda göre döviz ara")?;
        writeln!(self.output, "3. Belirli bir değerden büyük dövizleri listele")?;
        writeln!(self.output, "4. Dövizleri değere göre sırala")?;
        writeln!(self.output, "5. İstatistiksel özet göster")?;
        writeln!(self.output, "0. Çıkış")?;
        write!(self.output, "Seçiminiz: ")?;
        self.output.flush()
    }

    fn list_all(&mut self) -> io::Result<()> {
        let sheet = self.sheet;
        writeln!(self.output)?;
        writeln!(self.output, "Tüm dövizler ({} bazlı):", sheet.base)?;
        if let Some(date) = sheet.date {
            writeln!(self.output, "Kur tarihi: {}", date.format("%d.%m.%Y"))?;
        }
        writeln!(self.output, "{}", RULE)?;
        let rows = queries::list_all(&sheet.records);
        self.write_rows(&rows)
    }

    fn search_by_code(&mut self) -> io::Result<()> {
        let line = self.prompt("Aranacak döviz kodu (ör: USD): ")?;
        let code = match parse_search_code(&line) {
            Ok(code) => code,
            Err(e) => return writeln!(self.output, "{}", e),
        };

        let sheet = self.sheet;
        let results = queries::search_by_code(&sheet.records, code);
        writeln!(self.output)?;
        if results.is_empty() {
            return writeln!(self.output, "'{}' kodlu döviz bulunamadı.", code);
        }
        for record in results {
            writeln!(self.output, "{} : {}", record.code, record.rate)?;
        }
        Ok(())
    }

    fn list_above_threshold(&mut self) -> io::Result<()> {
        let line = self.prompt("Eşik değer girin (ör: 0.03): ")?;
        let threshold = match parse_threshold(&line) {
            Ok(threshold) => threshold,
            Err(e) => return writeln!(self.output, "{}", e),
        };

        let sheet = self.sheet;
        let results = queries::filter_above(&sheet.records, threshold);
        writeln!(self.output)?;
        if results.is_empty() {
            return writeln!(self.output, "{} değerinden büyük döviz bulunamadı.", threshold);
        }
        writeln!(self.output, "{} değerinden büyük dövizler:", threshold)?;
        writeln!(self.output, "{}", RULE)?;
        self.write_rows(&results)
    }

    fn sort_by_rate(&mut self) -> io::Result<()> {
        let line = self.prompt("Sıralama (A=Artan, Z=Azalan): ")?;
        let direction = SortDirection::from_flag(&line);

        let sheet = self.sheet;
        let sorted = queries::sort_by_rate(&sheet.records, direction);
        writeln!(self.output)?;
        writeln!(self.output, "Sıralı dövizler:")?;
        writeln!(self.output, "{}", RULE)?;
        self.write_rows(&sorted)
    }

    fn show_statistics(&mut self) -> io::Result<()> {
        let sheet = self.sheet;
        let Some(stats) = queries::statistics(&sheet.records) else {
            return writeln!(self.output, "Veri yok.");
        };

        writeln!(self.output)?;
        writeln!(self.output, "İstatistiksel Özet")?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "Toplam döviz sayısı : {}", stats.count)?;
        writeln!(self.output, "En yüksek kur       : {} ({})", stats.max.code, stats.max.rate)?;
        writeln!(self.output, "En düşük kur        : {} ({})", stats.min.code, stats.min.rate)?;
        writeln!(self.output, "Ortalama kur        : {}", stats.average)
    }

    fn write_rows(&mut self, records: &[&CurrencyRecord]) -> io::Result<()> {
        for record in records {
            writeln!(self.output, "{}", format_row(record))?;
        }
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    /// Next input line without its line ending and surrounding whitespace.
    /// `None` once input is exhausted. Bytes that aren't UTF-8 become U+FFFD.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }
}

/// `"USD    : 0.03094"`
pub fn format_row(record: &CurrencyRecord) -> String {
    format!("{:<6} : {}", record.code, record.rate)
}
