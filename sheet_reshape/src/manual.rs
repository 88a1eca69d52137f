/*!

This is the long-form manual for `sheet_reshape` and `oscanconv`.

## Input layout

An OSCAN export is a wide table with one row per respondent. The leading
columns are respondent metadata (serial number, file name, school code, ...)
and every remaining column is an answer cell. Answer cells are laid out as
repeated fixed-width blocks: with 40 questions per block and 31 blocks, the
first 40 answer columns are block 1, the next 40 are block 2, and so on.

The export does not have to match the nominal geometry exactly. Extra answer
columns past the last block are ignored, and blocks that run past the end of
the row are simply shorter.

## Cleaning

Answer cells come out of CSV and Excel readers as text, numbers or blanks.
Each cell is trimmed, parsed as a number and truncated to an integer; any
cell that does not parse becomes `0`, the sentinel for "no answer". Bad cells
never abort a conversion.

## Row expansion

Each respondent expands into as many output rows as positional slots were
used on the sheet. Output row `i` carries position `i` of every block in the
columns `Q1`, `Q2`, ..., with the respondent metadata repeated verbatim.

Two rules decide the number of rows:

### `normal`

For each block, take the 1-based position of the last non-zero value (0 for
an all-zero block); the row count is the maximum over all blocks. Note that
this is a position, not a count of non-zero values: interior zeros are
skipped items and still occupy a slot.

### `kdmc`

KDMC sheets encode the row count in two specific blocks: the number of
non-zero values in block 1 plus the number of non-zero values in block 18.
This rule requires more than 17 blocks; with fewer blocks the `normal` rule
applies regardless.

## Output

The output is a CSV table whose header is the metadata columns in their
given order, followed by `Q1..Qn` with `n` the number of blocks. Rows
generated for one respondent are consecutive and in slot order.

*/
